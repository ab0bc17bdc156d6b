//! # Unified Application Configuration
//!
//! Consolidates the settings of the command line shell into one structured
//! object loaded from environment variables. The classification engine
//! itself has no configuration: its rule tables are compiled in.

use crate::errors::{AppError, AppResult};
use crate::observability_config::ObservabilityConfig;
use crate::report::OutputFormat;
use std::env;

/// Input collection settings
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Maximum number of characters accepted per classification request
    pub max_input_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_input_length: 10_000,
        }
    }
}

impl InputConfig {
    /// Validate input configuration
    pub fn validate(&self) -> AppResult<()> {
        if self.max_input_length == 0 {
            return Err(AppError::Config(
                "max_input_length must be greater than 0".to_string(),
            ));
        }

        if self.max_input_length > 1_000_000 {
            return Err(AppError::Config(
                "max_input_length cannot be greater than 1000000".to_string(),
            ));
        }

        Ok(())
    }
}

/// Output rendering settings
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Default output format when the command line does not choose one
    pub format: OutputFormat,
    /// Whether unresolved dimensions are highlighted in tables
    pub highlight_unresolved: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            highlight_unresolved: true,
        }
    }
}

/// Unified application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Input collection configuration
    pub input: InputConfig,
    /// Output rendering configuration
    pub output: OutputConfig,
    /// Observability configuration
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        config.input.max_input_length = env::var("MAX_INPUT_LENGTH")
            .unwrap_or_else(|_| "10000".to_string())
            .parse()
            .map_err(|_| AppError::Config("MAX_INPUT_LENGTH must be a valid number".to_string()))?;

        config.output.format = env::var("OUTPUT_FORMAT")
            .unwrap_or_else(|_| "table".to_string())
            .parse()
            .map_err(|e: String| AppError::Config(format!("OUTPUT_FORMAT: {}", e)))?;
        config.output.highlight_unresolved = env::var("NO_COLOR").is_err();

        config.observability = ObservabilityConfig::from_env();

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> AppResult<()> {
        self.input.validate()?;
        self.observability.validate().map_err(AppError::Config)?;
        Ok(())
    }

    /// Get a summary of the current configuration for logging
    pub fn summary(&self) -> String {
        format!(
            "Configuration: environment={}, log_level={}, output_format={}, highlight_unresolved={}, max_input_length={}, metrics_export={}",
            self.observability.environment,
            self.observability.log_level,
            self.output.format,
            self.output.highlight_unresolved,
            self.input.max_input_length,
            self.observability.enable_metrics_export,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_input_config_validation() {
        let mut config = InputConfig::default();
        assert!(config.validate().is_ok());

        config.max_input_length = 0;
        assert!(config.validate().is_err());

        config.max_input_length = 2_000_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_observability_section_is_config_error() {
        let mut config = AppConfig::default();
        config.observability.log_level = "chatty".to_string();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_summary_mentions_settings() {
        let summary = AppConfig::default().summary();
        assert!(summary.contains("output_format=table"));
        assert!(summary.contains("max_input_length=10000"));
    }
}

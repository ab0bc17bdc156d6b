//! # Unit Converters
//!
//! Pure numeric conversions used by the power and voltage extractors.

use std::fmt;
use std::str::FromStr;

/// Round to three decimals, the precision voltages are reported with.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Convert a voltage magnitude to kV.
///
/// Suppliers omit units inconsistently, so magnitude decides: values of
/// 100 and above are volts, anything below is already kV.
///
/// # Examples
/// ```
/// use transformer_code::units::voltage_to_kv;
///
/// assert_eq!(voltage_to_kv(14400.0), 14.4);
/// assert_eq!(voltage_to_kv(20.0), 20.0);
/// assert_eq!(voltage_to_kv(690.0), 0.69);
/// ```
pub fn voltage_to_kv(value: f64) -> f64 {
    if value >= 100.0 {
        round3(value / 1000.0)
    } else {
        round3(value)
    }
}

/// Recognized apparent/real power units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUnit {
    Kva,
    Mva,
    W,
    Kw,
    Va,
}

impl PowerUnit {
    /// Divisor that turns a value in this unit into MVA
    pub fn mva_divisor(self) -> f64 {
        match self {
            PowerUnit::Kva => 1_000.0,
            PowerUnit::Mva => 1.0,
            PowerUnit::W => 1_000_000.0,
            PowerUnit::Kw => 1_000.0,
            PowerUnit::Va => 1_000_000.0,
        }
    }

    /// Convert a value expressed in this unit to MVA
    pub fn to_mva(self, value: f64) -> f64 {
        value / self.mva_divisor()
    }
}

impl fmt::Display for PowerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self {
            PowerUnit::Kva => "kVA",
            PowerUnit::Mva => "MVA",
            PowerUnit::W => "W",
            PowerUnit::Kw => "kW",
            PowerUnit::Va => "VA",
        };
        write!(f, "{}", unit)
    }
}

impl FromStr for PowerUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kva" => Ok(PowerUnit::Kva),
            "mva" => Ok(PowerUnit::Mva),
            "w" => Ok(PowerUnit::W),
            "kw" => Ok(PowerUnit::Kw),
            "va" => Ok(PowerUnit::Va),
            other => Err(format!("unrecognized power unit '{}'", other)),
        }
    }
}

/// Convert a power value to MVA.
///
/// Returns `None` when the unit is not one of kVA, MVA, W, kW or VA
/// (case-insensitive); callers treat that as an unresolved rating.
///
/// # Examples
/// ```
/// use transformer_code::units::power_to_mva;
///
/// assert_eq!(power_to_mva(2300.0, "kVA"), Some(2.3));
/// assert_eq!(power_to_mva(40.0, "mva"), Some(40.0));
/// assert_eq!(power_to_mva(5.0, "hp"), None);
/// ```
pub fn power_to_mva(value: f64, unit: &str) -> Option<f64> {
    unit.parse::<PowerUnit>()
        .ok()
        .map(|unit| unit.to_mva(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voltage_to_kv_volts() {
        assert_eq!(voltage_to_kv(100.0), 0.1);
        assert_eq!(voltage_to_kv(10000.0), 10.0);
        assert_eq!(voltage_to_kv(415.0), 0.415);
    }

    #[test]
    fn test_voltage_to_kv_already_kv() {
        assert_eq!(voltage_to_kv(99.9), 99.9);
        assert_eq!(voltage_to_kv(0.4), 0.4);
        assert_eq!(voltage_to_kv(6.3333), 6.333);
    }

    #[test]
    fn test_power_to_mva_all_units() {
        assert_eq!(power_to_mva(2500.0, "kVA"), Some(2.5));
        assert_eq!(power_to_mva(63.0, "MVA"), Some(63.0));
        assert_eq!(power_to_mva(500_000.0, "W"), Some(0.5));
        assert_eq!(power_to_mva(1500.0, "kW"), Some(1.5));
        assert_eq!(power_to_mva(2_000_000.0, "VA"), Some(2.0));
    }

    #[test]
    fn test_power_to_mva_case_insensitive() {
        assert_eq!(power_to_mva(1000.0, "KVA"), Some(1.0));
        assert_eq!(power_to_mva(1000.0, "KW"), Some(1.0));
    }

    #[test]
    fn test_power_to_mva_unknown_unit() {
        assert_eq!(power_to_mva(10.0, "A"), None);
        assert_eq!(power_to_mva(10.0, ""), None);
    }

    #[test]
    fn test_power_unit_display_round_trips() {
        for unit in [
            PowerUnit::Kva,
            PowerUnit::Mva,
            PowerUnit::W,
            PowerUnit::Kw,
            PowerUnit::Va,
        ] {
            assert_eq!(unit.to_string().parse::<PowerUnit>(), Ok(unit));
        }
    }
}

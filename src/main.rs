use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::{debug, info};
use transformer_code::config::AppConfig;
use transformer_code::errors::error_logging;
use transformer_code::input;
use transformer_code::observability;
use transformer_code::report::{self, OutputFormat};
use transformer_code::validation::{validate_supplier_text, validation_message};

#[derive(Parser, Debug)]
#[command(name = "transformer-code")]
#[command(about = "Extract parameters from supplier specifications and generate the product code", long_about = None)]
#[command(version)]
struct Cli {
    /// Supplier specification text (read from --file or stdin when omitted)
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Read supplier text from a file
    #[arg(short = 'i', long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    file: Option<PathBuf>,

    /// Classify every non-blank line as a separate specification
    #[arg(short, long)]
    batch: bool,

    /// Output format (defaults to OUTPUT_FORMAT or table)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Print a Prometheus metrics snapshot to stderr when done
    #[arg(long)]
    metrics: bool,
}

fn collect_text(cli: &Cli) -> Result<String> {
    if !cli.text.is_empty() {
        return Ok(cli.text.join(" "));
    }
    if let Some(path) = &cli.file {
        return Ok(input::read_text_file(path)?);
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        debug!("No supplier text given and stdin is a terminal");
        return Ok(String::new());
    }
    Ok(input::read_text(stdin.lock())?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present; real environment variables win
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().inspect_err(|e| {
        error_logging::log_config_error(e, "environment", "load_config");
    })?;
    config.validate()?;

    let metrics_handle =
        observability::init_observability_with_config(&config.observability, cli.metrics)?;
    info!("{}", config.summary());

    let format = cli.format.unwrap_or(config.output.format);
    let highlight = config.output.highlight_unresolved && format == OutputFormat::Table;
    let text = collect_text(&cli)?;
    let source = if !cli.text.is_empty() {
        "args"
    } else if cli.file.is_some() {
        "file"
    } else {
        "stdin"
    };

    let mut stdout = io::stdout().lock();
    if cli.batch {
        let entries = input::classify_batch(&text);
        let _span = observability::classification_span(source, entries.len()).entered();
        if entries.is_empty() {
            eprintln!("{}", validation_message("empty"));
            std::process::exit(1);
        }
        report::write_batch(&mut stdout, &entries, format, highlight)?;
    } else {
        let _span = observability::classification_span(source, 1).entered();
        let supplier_text = match validate_supplier_text(&text, config.input.max_input_length) {
            Ok(valid) => valid,
            Err(kind) => {
                error_logging::log_validation_error(
                    &kind,
                    "validate_supplier_text",
                    "supplier_text",
                    Some(&text),
                );
                eprintln!("{}", validation_message(kind));
                std::process::exit(1);
            }
        };
        let classification = transformer_code::extract_attributes(supplier_text);
        report::write_classification(&mut stdout, &classification, format, highlight)?;
    }

    if let Some(handle) = metrics_handle {
        eprintln!("{}", handle.render());
    }

    Ok(())
}

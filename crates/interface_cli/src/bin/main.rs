//! Lease Contract - Command-Line Binary
//!
//! Validates and renders residential lease contracts stored as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Render a contract as plain text
//! lease-contract render contract.json
//!
//! # Render as JSON clause blocks, without the validation gate
//! lease-contract render contract.json --format json --skip-validation
//!
//! # List validation errors
//! lease-contract validate contract.json
//!
//! # Check a single value
//! lease-contract check iban "ES91 2100 0418 4502 0005 1332"
//! ```
//!
//! # Environment Variables
//!
//! * `LEASE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `LEASE_OUTPUT_FORMAT` - Default output format for `render`: text, json (default: text)
//! * `RUST_LOG` - Overrides `LEASE_LOG_LEVEL` when set

use clap::Parser;
use interface_cli::{run, Cli, CliConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Main entry point for the CLI.
///
/// Loads configuration, initializes logging and runs the requested command.
/// The document or report goes to stdout; logs go to stderr.
///
/// # Errors
///
/// Returns an error if the contract file cannot be read or parsed, or if
/// `render` is refused by the validation gate.
fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().unwrap_or_default();
    init_tracing(&config.log_level);

    let cli = Cli::parse();
    let outcome = run(cli, &config)?;

    println!("{}", outcome.output);
    if !outcome.success {
        std::process::exit(1);
    }
    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr.
///
/// # Arguments
///
/// * `log_level` - The minimum log level to output (trace, debug, info, warn, error)
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}

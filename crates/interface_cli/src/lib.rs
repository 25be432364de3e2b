//! Lease Contract CLI
//!
//! Thin command-line surface over `domain_lease`. It reads a contract as
//! JSON, runs it through the validation gate and prints the assembled
//! document. No contract rule lives here.
//!
//! # Commands
//!
//! - `render <FILE>`: prints the document as text or JSON clause blocks
//! - `validate <FILE>`: prints field errors and warnings
//! - `check <KIND> <VALUE>`: runs a single field validator
//!
//! Every command returns an [`Outcome`] instead of printing, so the binary
//! only decides where the text goes and which exit code to use.

pub mod config;
pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use tracing::info;

use domain_lease::{
    assemble_document, render_plain_text, try_assemble_document, validate_email, validate_iban,
    validate_identity_number, validate_phone, ContractData, ContractValidator, LeaseError,
};

pub use config::CliConfig;
pub use error::CliError;

#[derive(Parser, Debug)]
#[command(
    name = "lease-contract",
    about = "Validate and render Spanish residential lease contracts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a contract document from a JSON file
    Render(RenderArgs),
    /// Validate a contract JSON file and list its errors
    Validate {
        /// Path to the contract JSON
        file: PathBuf,
    },
    /// Check a single value with one of the field validators
    Check {
        #[arg(value_enum)]
        kind: CheckKind,
        value: String,
    },
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the contract JSON
    pub file: PathBuf,
    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Render even if the contract does not pass validation
    #[arg(long)]
    pub skip_validation: bool,
}

/// How a rendered document is printed
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Field validators reachable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckKind {
    /// DNI or NIE
    Id,
    Iban,
    Email,
    Phone,
}

/// Text to print and whether the command succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    pub success: bool,
}

impl Outcome {
    fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }

    fn failure(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: false,
        }
    }
}

/// Runs a parsed command
pub fn run(cli: Cli, config: &CliConfig) -> Result<Outcome, CliError> {
    match cli.command {
        Command::Render(args) => {
            let data = read_contract(&args.file)?;
            let format = args.format.unwrap_or(config.output_format);
            info!(file = %args.file.display(), ?format, "Rendering contract");
            render_contract(&data, format, args.skip_validation).map(Outcome::success)
        }
        Command::Validate { file } => {
            let data = read_contract(&file)?;
            info!(file = %file.display(), "Validating contract");
            Ok(validation_report(&data))
        }
        Command::Check { kind, value } => Ok(check_value(kind, &value)),
    }
}

/// Reads and parses a contract JSON file
pub fn read_contract(path: &Path) -> Result<ContractData, CliError> {
    let json = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_contract(&json)?)
}

/// Parses a contract from JSON; missing sections take their defaults
pub fn parse_contract(json: &str) -> Result<ContractData, LeaseError> {
    Ok(serde_json::from_str(json)?)
}

/// Assembles the document and formats it
pub fn render_contract(
    data: &ContractData,
    format: OutputFormat,
    skip_validation: bool,
) -> Result<String, CliError> {
    let blocks = if skip_validation {
        assemble_document(data)
    } else {
        try_assemble_document(data)?
    };

    match format {
        OutputFormat::Text => Ok(render_plain_text(&blocks)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&blocks)?),
    }
}

/// One line per error and warning; `valid` when there are none
pub fn validation_report(data: &ContractData) -> Outcome {
    let result = ContractValidator::validate(data);

    let mut lines: Vec<String> = result.errors.iter().map(ToString::to_string).collect();
    lines.extend(result.warnings.iter().map(|w| format!("warning: {}", w)));
    if result.is_valid {
        lines.insert(0, "valid".to_string());
    }

    let output = lines.join("\n");
    if result.is_valid {
        Outcome::success(output)
    } else {
        Outcome::failure(output)
    }
}

/// Runs one field validator
pub fn check_value(kind: CheckKind, value: &str) -> Outcome {
    let valid = match kind {
        CheckKind::Id => validate_identity_number(value),
        CheckKind::Iban => validate_iban(value),
        CheckKind::Email => validate_email(value),
        CheckKind::Phone => validate_phone(value),
    };

    if valid {
        Outcome::success("valid")
    } else {
        Outcome::failure("invalid")
    }
}

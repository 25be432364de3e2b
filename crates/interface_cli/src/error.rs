//! CLI error handling

use std::path::PathBuf;

use domain_lease::LeaseError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Lease(#[from] LeaseError),

    #[error("Cannot serialize document: {0}")]
    Output(#[from] serde_json::Error),
}

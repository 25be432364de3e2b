//! Lease domain errors

use thiserror::Error;

use crate::validation::FieldError;

/// Errors that can occur in the lease domain
#[derive(Debug, Error)]
pub enum LeaseError {
    /// The contract did not pass the validation gate
    #[error("Contract validation failed: {}", join_errors(.0))]
    ValidationFailed(Vec<FieldError>),

    /// The contract could not be read
    #[error("Invalid contract data: {0}")]
    InvalidData(String),
}

impl LeaseError {
    /// Field errors carried by a failed validation
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            LeaseError::ValidationFailed(errors) => errors,
            LeaseError::InvalidData(_) => &[],
        }
    }
}

impl From<serde_json::Error> for LeaseError {
    fn from(err: serde_json::Error) -> Self {
        LeaseError::InvalidData(err.to_string())
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

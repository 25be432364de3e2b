//! Document assembly
//!
//! Turns a [`ContractData`] into the ordered blocks of a Spanish residential
//! lease: the recitals (REUNIDOS), the exposition (EXPONEN), the numbered
//! clauses and the signatures. Assembly is pure and total. It never fails on
//! missing fields; those render as placeholders. Callers that want to refuse
//! incomplete contracts use [`try_assemble_document`], which runs the
//! validation gate first.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clauses::{self, DOCUMENT_TITLE};
use crate::contract::ContractData;
use crate::derived::clause_ordinals;
use crate::error::LeaseError;
use crate::validation::ContractValidator;

/// Title of the recitals block
pub const RECITALS_TITLE: &str = "REUNIDOS";
/// Title of the exposition block
pub const EXPOSITION_TITLE: &str = "EXPONEN";
/// Title of the closing block
pub const SIGNATURES_TITLE: &str = "FIRMAS";

/// A titled block of contract text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClauseBlock {
    pub title: String,
    pub body: String,
}

impl ClauseBlock {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Assembles every block of the contract in document order
///
/// The same input always yields the same blocks.
pub fn assemble_document(data: &ContractData) -> Vec<ClauseBlock> {
    let numbered = clause_ordinals(data.has_guarantors());

    let mut blocks = Vec::with_capacity(numbered.len() + 3);
    blocks.push(ClauseBlock::new(RECITALS_TITLE, clauses::recitals(data)));
    blocks.push(ClauseBlock::new(EXPOSITION_TITLE, clauses::exposition(data)));
    blocks.extend(
        numbered
            .iter()
            .map(|clause| ClauseBlock::new(clause.title(), clauses::clause_body(clause, data))),
    );
    blocks.push(ClauseBlock::new(SIGNATURES_TITLE, clauses::closing(data)));

    debug!(
        parties = data.parties.len(),
        guarantors = data.has_guarantors(),
        numbered_clauses = numbered.len(),
        "Assembled lease document"
    );

    blocks
}

/// Assembles the contract only if it passes validation
pub fn try_assemble_document(data: &ContractData) -> Result<Vec<ClauseBlock>, LeaseError> {
    let result = ContractValidator::validate(data);
    if !result.is_valid {
        debug!(errors = result.errors.len(), "Refusing to assemble invalid contract");
        return Err(LeaseError::ValidationFailed(result.errors));
    }
    Ok(assemble_document(data))
}

/// Renders assembled blocks as plain text under the document title
pub fn render_plain_text(blocks: &[ClauseBlock]) -> String {
    let mut out = String::from(DOCUMENT_TITLE);
    for block in blocks {
        out.push_str("\n\n");
        out.push_str(&block.title);
        out.push_str("\n\n");
        out.push_str(&block.body);
    }
    out.push('\n');
    out
}

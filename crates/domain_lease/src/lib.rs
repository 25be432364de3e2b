//! Residential Lease Domain
//!
//! This crate models a Spanish residential lease (arrendamiento de vivienda)
//! and produces its legal text. It is free of I/O: callers hand in a
//! [`ContractData`] and get back validation results or document blocks.
//!
//! # Components
//!
//! - **Data model**: parties, property, financial terms, expenses, options
//! - **Checksum validators**: DNI / NIE, IBAN, email, phone
//! - **Validation gate**: per form step and for the whole contract
//! - **Derived fields**: annual rent, clause ordinals
//! - **Document assembly**: ordered clause blocks and plain-text rendering
//!
//! # Drafting flow
//!
//! ```text
//! Configuration -> Parties -> Property -> Conditions -> Review
//!                                                         \-> assemble_document
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_lease::{ContractData, PartyCounts, try_assemble_document, render_plain_text};
//!
//! let data = ContractData::draft(today).with_party_slots(PartyCounts::default());
//! // ... fill in parties, property and conditions ...
//! let blocks = try_assemble_document(&data)?;
//! println!("{}", render_plain_text(&blocks));
//! ```

pub mod party;
pub mod property;
pub mod financial;
pub mod expenses;
pub mod options;
pub mod contract;
pub mod checksum;
pub mod validation;
pub mod derived;
pub mod clauses;
pub mod document;
pub mod error;

pub use party::{Party, PartyCounts, PartyRole, DEFAULT_NATIONALITY};
pub use property::PropertyDetails;
pub use financial::{FinancialDetails, GuaranteeType, PaymentMethod};
pub use expenses::{ExpenseDetails, ExpensePayer};
pub use options::{FurnitureState, LeaseOptions, PetPolicy, RentUpdatePolicy};
pub use contract::ContractData;
pub use checksum::{validate_email, validate_iban, validate_identity_number, validate_phone, IdentityKind};
pub use validation::{ContractValidator, FieldError, FormStep, ValidationResult};
pub use derived::{clause_ordinals, compute_annual_rent, ordinal_label, ClauseKind, NumberedClause};
pub use document::{assemble_document, render_plain_text, try_assemble_document, ClauseBlock};
pub use error::LeaseError;

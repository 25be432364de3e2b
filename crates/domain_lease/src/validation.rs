//! Contract validation gate
//!
//! The drafting interface collects a contract in steps and may only move on
//! once the current step validates. This module holds those rules; the
//! document assembler trusts that they were applied and never re-checks.
//!
//! # Validation Rules
//!
//! ## Configuration
//! - At least one landlord and one tenant
//!
//! ## Parties
//! - Full name and identity number are required
//! - Identity number must be a valid DNI / NIE
//! - Phone and email are optional but must be well formed when present
//!
//! ## Property
//! - Address, signing location and cadastral reference are required
//! - Maximum occupancy must be at least one person
//!
//! ## Conditions
//! - Monthly rent is required
//! - Bank account is optional but must be a valid IBAN when present
//! - Community fees and property tax amounts are required when the tenant pays
//! - No amount may be negative
//!
//! Errors are keyed by form field so the interface can show each message
//! next to its input.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{is_blank, Money};

use crate::checksum::{validate_email, validate_iban, validate_identity_number, validate_phone};
use crate::contract::ContractData;
use crate::expenses::ExpensePayer;
use crate::party::PartyCounts;

pub const MSG_REQUIRED: &str = "Requerido";
pub const MSG_INVALID_IDENTITY: &str = "DNI/NIE inválido";
pub const MSG_INVALID_PHONE: &str = "Teléfono inválido";
pub const MSG_INVALID_EMAIL: &str = "Email inválido";
pub const MSG_INVALID_IBAN: &str = "IBAN inválido";
pub const MSG_REQUIRED_IF_TENANT_PAYS: &str = "Requerido si paga inquilino";
pub const MSG_INVALID_AMOUNT: &str = "Importe inválido";
pub const MSG_AT_LEAST_ONE: &str = "Se requiere al menos uno";
pub const MSG_MIN_OCCUPANCY: &str = "Debe ser al menos 1";

/// A validation failure attached to a form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Result of contract validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the contract passed
    pub is_valid: bool,
    /// Field errors, in the order they were found
    pub errors: Vec<FieldError>,
    /// Non-fatal issues
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Message of the first error reported for a field
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::ok()
    }
}

/// Steps in which a contract is drafted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStep {
    Configuration,
    Parties,
    Property,
    Conditions,
    Review,
}

impl FormStep {
    pub const ALL: [FormStep; 5] = [
        FormStep::Configuration,
        FormStep::Parties,
        FormStep::Property,
        FormStep::Conditions,
        FormStep::Review,
    ];
}

/// Validator for contract drafts
///
/// # Examples
///
/// ```rust
/// use domain_lease::contract::ContractData;
/// use domain_lease::validation::{ContractValidator, FormStep};
///
/// let draft = ContractData::default();
/// let result = ContractValidator::validate_step(FormStep::Property, &draft);
///
/// assert!(!result.is_valid);
/// assert_eq!(result.error_for("address"), Some("Requerido"));
/// ```
pub struct ContractValidator;

impl ContractValidator {
    /// Validates the fields collected in one step
    pub fn validate_step(step: FormStep, data: &ContractData) -> ValidationResult {
        let mut result = ValidationResult::ok();

        match step {
            FormStep::Configuration => Self::validate_counts(&data.party_counts(), &mut result),
            FormStep::Parties => Self::validate_parties(data, &mut result),
            FormStep::Property => Self::validate_property(data, &mut result),
            FormStep::Conditions => Self::validate_conditions(data, &mut result),
            FormStep::Review => {}
        }

        debug!(
            step = ?step,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            "Validated contract step"
        );
        result
    }

    /// Validates every step; a contract passing this is ready for assembly
    pub fn validate(data: &ContractData) -> ValidationResult {
        FormStep::ALL
            .iter()
            .fold(ValidationResult::ok(), |mut result, step| {
                result.merge(Self::validate_step(*step, data));
                result
            })
    }

    /// Validates the number of parties per role
    pub fn validate_party_counts(counts: &PartyCounts) -> ValidationResult {
        let mut result = ValidationResult::ok();
        Self::validate_counts(counts, &mut result);
        result
    }

    fn validate_counts(counts: &PartyCounts, result: &mut ValidationResult) {
        if counts.landlords == 0 {
            result.add_error("landlords", MSG_AT_LEAST_ONE);
        }
        if counts.tenants == 0 {
            result.add_error("tenants", MSG_AT_LEAST_ONE);
        }
    }

    fn validate_parties(data: &ContractData, result: &mut ValidationResult) {
        for (index, party) in data.parties.iter().enumerate() {
            let field = |name: &str| format!("party-{}-{}", index, name);

            if is_blank(&party.full_name) {
                result.add_error(field("fullName"), MSG_REQUIRED);
            }

            if is_blank(&party.doc_number) {
                result.add_error(field("docNumber"), MSG_REQUIRED);
            } else if !validate_identity_number(&party.doc_number) {
                result.add_error(field("docNumber"), MSG_INVALID_IDENTITY);
            }

            if !is_blank(&party.phone) && !validate_phone(&party.phone) {
                result.add_error(field("phone"), MSG_INVALID_PHONE);
            }

            if !is_blank(&party.email) && !validate_email(&party.email) {
                result.add_error(field("email"), MSG_INVALID_EMAIL);
            }
        }
    }

    fn validate_property(data: &ContractData, result: &mut ValidationResult) {
        let property = &data.property;

        if is_blank(&property.address) {
            result.add_error("address", MSG_REQUIRED);
        }
        if is_blank(&property.location) {
            result.add_error("location", MSG_REQUIRED);
        }
        if is_blank(&property.catastral_ref) {
            result.add_error("catastralRef", MSG_REQUIRED);
        }
        if property.max_occupancy == 0 {
            result.add_error("maxOccupancy", MSG_MIN_OCCUPANCY);
        }
        if property.date.is_none() {
            result.add_warning("Signing date not set; the document will show a blank date");
        }
    }

    fn validate_conditions(data: &ContractData, result: &mut ValidationResult) {
        let financials = &data.financials;
        let expenses = &data.expenses;

        if financials.monthly_rent.is_negative() || financials.annual_rent().is_err() {
            result.add_error("monthlyRent", MSG_INVALID_AMOUNT);
        } else if financials.monthly_rent.is_zero() {
            result.add_error("monthlyRent", MSG_REQUIRED);
        }

        if !is_blank(&financials.bank_account) && !validate_iban(&financials.bank_account) {
            result.add_error("bankAccount", MSG_INVALID_IBAN);
        }

        if financials.deposit_amount.is_negative() {
            result.add_error("depositAmount", MSG_INVALID_AMOUNT);
        }

        if financials.guarantee_type.is_present() {
            if financials.guarantee_amount.is_negative() {
                result.add_error("guaranteeAmount", MSG_INVALID_AMOUNT);
            }
        } else if !financials.guarantee_amount.is_zero() {
            result.add_warning("Guarantee amount is ignored while no additional guarantee is selected");
        }

        Self::validate_tenant_amount(
            "communityFeesAmount",
            expenses.community_fees_payer,
            expenses.community_fees_amount,
            result,
        );
        Self::validate_tenant_amount(
            "ibiAmount",
            expenses.ibi_payer,
            expenses.ibi_amount,
            result,
        );
    }

    fn validate_tenant_amount(
        field: &str,
        payer: ExpensePayer,
        amount: Option<Money>,
        result: &mut ValidationResult,
    ) {
        match (payer, amount) {
            (_, Some(amount)) if amount.is_negative() => {
                result.add_error(field, MSG_INVALID_AMOUNT);
            }
            (ExpensePayer::Tenant, None) => {
                result.add_error(field, MSG_REQUIRED_IF_TENANT_PAYS);
            }
            (ExpensePayer::Tenant, Some(amount)) if amount.is_zero() => {
                result.add_error(field, MSG_REQUIRED_IF_TENANT_PAYS);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::{Party, PartyRole};
    use rust_decimal_macros::dec;

    fn create_valid_contract() -> ContractData {
        let mut data = ContractData::default();
        data.add_party(Party::identified(PartyRole::Landlord, "Ana García", "12345678Z"));
        data.add_party(Party::identified(PartyRole::Tenant, "Luis Pérez", "X1234567L"));
        data.property.address = "Calle Mayor 1, 28013 Madrid".to_string();
        data.property.location = "Madrid".to_string();
        data.property.catastral_ref = "9872023VH5797S0001WX".to_string();
        data.financials.monthly_rent = Money::new(dec!(850));
        data
    }

    #[test]
    fn test_valid_contract() {
        let result = ContractValidator::validate(&create_valid_contract());
        assert!(result.is_valid, "Errors: {:?}", result.errors);
    }

    #[test]
    fn test_missing_roles() {
        let mut data = create_valid_contract();
        data.parties.retain(|p| p.role != PartyRole::Tenant);
        let result = ContractValidator::validate_step(FormStep::Configuration, &data);
        assert_eq!(result.error_for("tenants"), Some(MSG_AT_LEAST_ONE));
        assert_eq!(result.error_for("landlords"), None);
    }

    #[test]
    fn test_invalid_identity_number() {
        let mut data = create_valid_contract();
        data.parties[1].doc_number = "X1234567A".to_string();
        let result = ContractValidator::validate_step(FormStep::Parties, &data);
        assert_eq!(result.error_for("party-1-docNumber"), Some(MSG_INVALID_IDENTITY));
    }

    #[test]
    fn test_blank_identity_number_is_required_not_invalid() {
        let mut data = create_valid_contract();
        data.parties[0].doc_number = "  ".to_string();
        let result = ContractValidator::validate_step(FormStep::Parties, &data);
        assert_eq!(result.error_for("party-0-docNumber"), Some(MSG_REQUIRED));
    }

    #[test]
    fn test_optional_contact_fields() {
        let mut data = create_valid_contract();
        data.parties[0].phone = "612 345 678".to_string();
        data.parties[0].email = "ana@example.es".to_string();
        assert!(ContractValidator::validate_step(FormStep::Parties, &data).is_valid);

        data.parties[0].phone = "512345678".to_string();
        data.parties[0].email = "ana@example".to_string();
        let result = ContractValidator::validate_step(FormStep::Parties, &data);
        assert_eq!(result.error_for("party-0-phone"), Some(MSG_INVALID_PHONE));
        assert_eq!(result.error_for("party-0-email"), Some(MSG_INVALID_EMAIL));
    }

    #[test]
    fn test_tenant_paid_expenses_need_amount() {
        let mut data = create_valid_contract();
        data.expenses.community_fees_payer = ExpensePayer::Tenant;
        data.expenses.ibi_payer = ExpensePayer::Tenant;
        data.expenses.ibi_amount = Some(Money::zero());

        let result = ContractValidator::validate_step(FormStep::Conditions, &data);
        assert_eq!(
            result.error_for("communityFeesAmount"),
            Some(MSG_REQUIRED_IF_TENANT_PAYS)
        );
        assert_eq!(result.error_for("ibiAmount"), Some(MSG_REQUIRED_IF_TENANT_PAYS));
    }

    #[test]
    fn test_landlord_paid_expenses_need_no_amount() {
        let data = create_valid_contract();
        let result = ContractValidator::validate_step(FormStep::Conditions, &data);
        assert!(result.is_valid, "Errors: {:?}", result.errors);
    }

    #[test]
    fn test_review_step_has_no_rules() {
        let result = ContractValidator::validate_step(FormStep::Review, &ContractData::default());
        assert!(result.is_valid);
    }
}

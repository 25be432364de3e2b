//! Rent, payment and guarantee terms

use serde::{Deserialize, Serialize};

use core_kernel::{Money, MoneyError};

use crate::derived::compute_annual_rent;

/// How the monthly rent reaches the landlord
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// The tenant transfers the rent to the landlord's account
    Transfer,
    /// The landlord charges the rent to the tenant's account
    DirectDebit,
}

/// Guarantee delivered on top of the legal deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuaranteeType {
    None,
    Cash,
    Transfer,
    BankGuarantee,
}

impl GuaranteeType {
    /// Returns true when an additional guarantee is delivered
    pub fn is_present(&self) -> bool {
        !matches!(self, GuaranteeType::None)
    }
}

/// Economic terms of the lease
///
/// The annual rent is not a field: it is always derived from the monthly
/// rent through [`FinancialDetails::annual_rent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialDetails {
    pub monthly_rent: Money,
    pub payment_method: PaymentMethod,
    /// IBAN the rent is paid to (transfer) or charged from (direct debit)
    pub bank_account: String,
    pub bank_account_holder: String,
    pub bank_entity: String,
    /// Fianza legal
    pub deposit_amount: Money,
    pub deposit_months: u32,
    pub guarantee_type: GuaranteeType,
    /// Only meaningful when `guarantee_type` is not `None`
    pub guarantee_amount: Money,
}

impl FinancialDetails {
    /// Twelve monthly payments
    pub fn annual_rent(&self) -> Result<Money, MoneyError> {
        compute_annual_rent(self.monthly_rent)
    }

    /// Amount of the additional guarantee, if one is delivered
    pub fn additional_guarantee(&self) -> Option<Money> {
        self.guarantee_type
            .is_present()
            .then_some(self.guarantee_amount)
    }
}

impl Default for FinancialDetails {
    fn default() -> Self {
        Self {
            monthly_rent: Money::zero(),
            payment_method: PaymentMethod::Transfer,
            bank_account: String::new(),
            bank_account_holder: String::new(),
            bank_entity: String::new(),
            deposit_amount: Money::zero(),
            deposit_months: 1,
            guarantee_type: GuaranteeType::None,
            guarantee_amount: Money::zero(),
        }
    }
}

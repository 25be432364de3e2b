//! Allocation of general expenses between landlord and tenant

use serde::{Deserialize, Serialize};

use core_kernel::Money;

/// Who bears an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpensePayer {
    Landlord,
    Tenant,
}

/// General expenses of the dwelling
///
/// Community fees and property tax (IBI) carry an amount that must be stated
/// when the tenant pays them. The garbage tax is only allocated, never
/// quantified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpenseDetails {
    pub community_fees_payer: ExpensePayer,
    /// Current monthly community fee
    pub community_fees_amount: Option<Money>,
    pub ibi_payer: ExpensePayer,
    /// Current yearly property tax
    pub ibi_amount: Option<Money>,
    pub garbage_tax_payer: ExpensePayer,
}

impl Default for ExpenseDetails {
    fn default() -> Self {
        Self {
            community_fees_payer: ExpensePayer::Landlord,
            community_fees_amount: None,
            ibi_payer: ExpensePayer::Landlord,
            ibi_amount: None,
            garbage_tax_payer: ExpensePayer::Tenant,
        }
    }
}

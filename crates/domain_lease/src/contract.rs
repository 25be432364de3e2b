//! The contract aggregate
//!
//! `ContractData` is the single value passed between the drafting interface,
//! the validation gate and the document assembler. It is built up step by
//! step while the parties supply their data and is read-only input to
//! assembly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::expenses::ExpenseDetails;
use crate::financial::FinancialDetails;
use crate::options::LeaseOptions;
use crate::party::{Party, PartyCounts, PartyRole};
use crate::property::PropertyDetails;

/// All facts of a residential lease
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContractData {
    /// Every party, in the order entered
    pub parties: Vec<Party>,
    pub property: PropertyDetails,
    pub financials: FinancialDetails,
    pub expenses: ExpenseDetails,
    pub options: LeaseOptions,
}

impl ContractData {
    /// A fresh draft signed on the given date
    pub fn draft(today: NaiveDate) -> Self {
        let mut data = Self::default();
        data.property.date = Some(today);
        data
    }

    /// Replaces the parties with blank slots for the given counts
    pub fn with_party_slots(mut self, counts: PartyCounts) -> Self {
        self.parties = counts.blank_parties();
        self
    }

    /// Appends a party after those already entered
    pub fn add_party(&mut self, party: Party) {
        self.parties.push(party);
    }

    /// Parties of one role, in insertion order
    pub fn parties_with_role(&self, role: PartyRole) -> impl Iterator<Item = &Party> + '_ {
        self.parties.iter().filter(move |p| p.role == role)
    }

    pub fn landlords(&self) -> Vec<&Party> {
        self.parties_with_role(PartyRole::Landlord).collect()
    }

    pub fn tenants(&self) -> Vec<&Party> {
        self.parties_with_role(PartyRole::Tenant).collect()
    }

    pub fn guarantors(&self) -> Vec<&Party> {
        self.parties_with_role(PartyRole::Guarantor).collect()
    }

    /// Returns true when at least one guarantor signs the contract
    pub fn has_guarantors(&self) -> bool {
        self.parties_with_role(PartyRole::Guarantor).next().is_some()
    }

    /// Number of parties per role
    pub fn party_counts(&self) -> PartyCounts {
        PartyCounts::new(
            self.parties_with_role(PartyRole::Landlord).count(),
            self.parties_with_role(PartyRole::Tenant).count(),
            self.parties_with_role(PartyRole::Guarantor).count(),
        )
    }
}

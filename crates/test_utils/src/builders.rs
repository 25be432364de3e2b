//! Test Data Builders
//!
//! Provides a builder for complete contracts with sensible defaults. The
//! default contract passes validation; tests change only the fields they
//! care about.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_lease::{
    ContractData, ExpensePayer, FurnitureState, GuaranteeType, Party, PaymentMethod, PetPolicy,
    RentUpdatePolicy,
};

use crate::fixtures::{BankFixtures, MoneyFixtures, PartyFixtures, TemporalFixtures};

/// Builder for constructing test contracts
pub struct ContractDataBuilder {
    data: ContractData,
}

impl Default for ContractDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContractDataBuilder {
    /// Creates a builder for a valid contract with one landlord and one tenant
    pub fn new() -> Self {
        let mut data = ContractData::draft(TemporalFixtures::signing_date());
        data.add_party(PartyFixtures::landlord());
        data.add_party(PartyFixtures::tenant());

        data.property.location = "Madrid".to_string();
        data.property.address = "Calle de Alcalá 100, 3º B, 28009 Madrid".to_string();
        data.property.catastral_ref = "9872023VH5797S0001WX".to_string();
        data.property.habitability_cert = "HAB-2023-0042".to_string();
        data.property.energy_cert = "Clase E".to_string();

        data.financials.monthly_rent = MoneyFixtures::monthly_rent();
        data.financials.deposit_amount = MoneyFixtures::monthly_rent();
        data.financials.bank_account = BankFixtures::valid_ibans()[0].to_string();
        data.financials.bank_entity = BankFixtures::entity().to_string();

        Self { data }
    }

    /// Starts from an empty contract with no parties
    pub fn empty() -> Self {
        Self {
            data: ContractData::default(),
        }
    }

    pub fn with_party(mut self, party: Party) -> Self {
        self.data.add_party(party);
        self
    }

    pub fn with_guarantor(self) -> Self {
        self.with_party(PartyFixtures::guarantor())
    }

    pub fn without_parties(mut self) -> Self {
        self.data.parties.clear();
        self
    }

    pub fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        self.data.property.date = date;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.data.property.location = location.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.data.property.description = description.into();
        self
    }

    pub fn with_max_occupancy(mut self, occupancy: u32) -> Self {
        self.data.property.max_occupancy = occupancy;
        self
    }

    pub fn with_keys(mut self, keys: u32) -> Self {
        self.data.property.keys_count = keys;
        self
    }

    pub fn with_monthly_rent(mut self, rent: Money) -> Self {
        self.data.financials.monthly_rent = rent;
        self
    }

    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.data.financials.payment_method = method;
        self
    }

    pub fn with_bank_account(mut self, iban: impl Into<String>) -> Self {
        self.data.financials.bank_account = iban.into();
        self
    }

    pub fn with_bank_account_holder(mut self, holder: impl Into<String>) -> Self {
        self.data.financials.bank_account_holder = holder.into();
        self
    }

    pub fn with_deposit(mut self, amount: Money, months: u32) -> Self {
        self.data.financials.deposit_amount = amount;
        self.data.financials.deposit_months = months;
        self
    }

    pub fn with_guarantee(mut self, guarantee_type: GuaranteeType, amount: Money) -> Self {
        self.data.financials.guarantee_type = guarantee_type;
        self.data.financials.guarantee_amount = amount;
        self
    }

    pub fn with_community_fees(mut self, payer: ExpensePayer, amount: Option<Money>) -> Self {
        self.data.expenses.community_fees_payer = payer;
        self.data.expenses.community_fees_amount = amount;
        self
    }

    pub fn with_ibi(mut self, payer: ExpensePayer, amount: Option<Money>) -> Self {
        self.data.expenses.ibi_payer = payer;
        self.data.expenses.ibi_amount = amount;
        self
    }

    pub fn with_garbage_tax_payer(mut self, payer: ExpensePayer) -> Self {
        self.data.expenses.garbage_tax_payer = payer;
        self
    }

    pub fn with_pets(mut self, pets: PetPolicy) -> Self {
        self.data.options.pets = pets;
        self
    }

    pub fn with_furniture(mut self, furniture: FurnitureState) -> Self {
        self.data.options.furniture = furniture;
        self
    }

    pub fn with_rent_update(mut self, policy: RentUpdatePolicy) -> Self {
        self.data.options.rent_update = policy;
        self
    }

    pub fn with_inventory(mut self, has_inventory: bool) -> Self {
        self.data.options.has_inventory = has_inventory;
        self
    }

    /// Builds the contract
    pub fn build(self) -> ContractData {
        self.data
    }
}

//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the lease domain. Every identity
//! number and IBAN here carries a correct check character, so fixtures can
//! be combined freely without tripping the validators.

use chrono::NaiveDate;
use core_kernel::Money;
use domain_lease::{Party, PartyRole};
use rust_decimal_macros::dec;

/// Fixture for identity numbers
pub struct IdentityFixtures;

impl IdentityFixtures {
    /// Valid DNI numbers
    pub fn valid_dnis() -> [&'static str; 3] {
        ["12345678Z", "00000000T", "87654321X"]
    }

    /// Valid NIE numbers, one per prefix
    pub fn valid_nies() -> [&'static str; 3] {
        ["X1234567L", "Y1234567X", "Z1234567R"]
    }

    /// Well-formed DNI with the wrong check letter
    pub fn wrong_letter_dni() -> &'static str {
        "12345678A"
    }
}

/// Fixture for banking data
pub struct BankFixtures;

impl BankFixtures {
    /// Valid Spanish IBANs
    pub fn valid_ibans() -> [&'static str; 3] {
        [
            "ES9121000418450200051332",
            "ES7921000813610123456789",
            "ES6621000418401234567891",
        ]
    }

    /// A valid IBAN written in the usual groups of four
    pub fn spaced_iban() -> &'static str {
        "ES91 2100 0418 4502 0005 1332"
    }

    /// A valid IBAN with its last digit changed
    pub fn corrupted_iban() -> &'static str {
        "ES9121000418450200051333"
    }

    pub fn entity() -> &'static str {
        "CaixaBank"
    }
}

/// Fixture for the parties of a typical lease
pub struct PartyFixtures;

impl PartyFixtures {
    pub fn landlord() -> Party {
        Party::identified(PartyRole::Landlord, "Ana García López", "12345678Z")
            .with_address("Calle Mayor 1, 28013 Madrid")
            .with_phone("612345678")
            .with_email("ana.garcia@example.es")
    }

    pub fn tenant() -> Party {
        Party::identified(PartyRole::Tenant, "Luis Martín Pérez", "X1234567L")
            .with_nationality("Italiana")
            .with_phone("+34 699 111 222")
    }

    pub fn second_tenant() -> Party {
        Party::identified(PartyRole::Tenant, "Marta Ruiz Sanz", "87654321X")
    }

    pub fn guarantor() -> Party {
        Party::identified(PartyRole::Guarantor, "Carmen López Díaz", "00000000T")
            .with_address("Avenida de América 10, 28028 Madrid")
    }
}

/// Fixture for amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Standard monthly rent
    pub fn monthly_rent() -> Money {
        Money::new(dec!(850))
    }

    /// Rent above a thousand, to exercise thousands grouping
    pub fn high_rent() -> Money {
        Money::new(dec!(1250))
    }

    pub fn community_fees() -> Money {
        Money::new(dec!(60))
    }

    pub fn ibi() -> Money {
        Money::new(dec!(420.50))
    }
}

/// Fixture for dates
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard signing date (15 March 2024)
    pub fn signing_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }
}

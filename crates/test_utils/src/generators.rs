//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data that
//! maintains domain invariants. Check characters are computed here
//! independently of the validators under test.

use core_kernel::Money;
use domain_lease::{
    ContractData, ExpensePayer, FurnitureState, GuaranteeType, Party, PartyRole, PaymentMethod,
    PetPolicy, RentUpdatePolicy,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::builders::ContractDataBuilder;

const CHECK_LETTERS: &[u8] = b"TRWAGMYFPDXBNJZSQVHLCKE";

fn check_letter(number: u32) -> char {
    CHECK_LETTERS[(number % 23) as usize] as char
}

/// Strategy for generating valid DNI numbers
pub fn valid_dni_strategy() -> impl Strategy<Value = String> {
    (0u32..100_000_000u32).prop_map(|n| format!("{:08}{}", n, check_letter(n)))
}

/// Strategy for generating valid NIE numbers
pub fn valid_nie_strategy() -> impl Strategy<Value = String> {
    (0u32..3u32, 0u32..10_000_000u32).prop_map(|(prefix, n)| {
        let letter = check_letter(prefix * 10_000_000 + n);
        let prefix = ['X', 'Y', 'Z'][prefix as usize];
        format!("{}{:07}{}", prefix, n, letter)
    })
}

/// Strategy for generating DNI numbers paired with a wrong check letter
pub fn wrong_letter_dni_strategy() -> impl Strategy<Value = String> {
    (0u32..100_000_000u32, 1u32..23u32).prop_map(|(n, offset)| {
        let wrong = CHECK_LETTERS[((n % 23 + offset) % 23) as usize] as char;
        format!("{:08}{}", n, wrong)
    })
}

/// Strategy for generating valid Spanish IBANs
///
/// The check digits are `98 - (BBAN ++ "1428" ++ "00") mod 97`, where 14 and
/// 28 are the numeric values of E and S.
pub fn valid_spanish_iban_strategy() -> impl Strategy<Value = String> {
    "[0-9]{20}".prop_map(|bban| {
        let numeric = format!("{}142800", bban);
        let remainder = numeric.parse::<u128>().unwrap_or_default() % 97;
        format!("ES{:02}{}", 98 - remainder, bban)
    })
}

/// Strategy for generating positive rents with cents
pub fn rent_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000_000i64).prop_map(Money::from_cents)
}

fn payer_strategy() -> impl Strategy<Value = ExpensePayer> {
    prop_oneof![Just(ExpensePayer::Landlord), Just(ExpensePayer::Tenant)]
}

/// Strategy for generating valid contracts across every option combination
pub fn contract_strategy() -> impl Strategy<Value = ContractData> {
    let options = (
        prop_oneof![Just(PetPolicy::Forbidden), Just(PetPolicy::Allowed)],
        prop_oneof![
            Just(FurnitureState::Empty),
            Just(FurnitureState::KitchenEquipped),
            Just(FurnitureState::Furnished),
        ],
        prop_oneof![
            Just(RentUpdatePolicy::NoUpdate),
            Just(RentUpdatePolicy::IndexUpdate),
            Just(RentUpdatePolicy::IndexUpdateFloor),
        ],
        any::<bool>(),
    );
    let terms = (
        rent_strategy(),
        prop_oneof![Just(PaymentMethod::Transfer), Just(PaymentMethod::DirectDebit)],
        prop_oneof![
            Just(GuaranteeType::None),
            Just(GuaranteeType::Cash),
            Just(GuaranteeType::Transfer),
            Just(GuaranteeType::BankGuarantee),
        ],
        payer_strategy(),
        payer_strategy(),
        payer_strategy(),
    );
    let parties = (
        proptest::collection::vec(valid_dni_strategy(), 1..3),
        proptest::collection::vec(valid_nie_strategy(), 1..3),
        proptest::collection::vec(valid_dni_strategy(), 0..3),
    );

    (options, terms, parties).prop_map(
        |(
            (pets, furniture, rent_update, has_inventory),
            (rent, method, guarantee, community, ibi, garbage),
            (landlords, tenants, guarantors),
        )| {
            let mut builder = ContractDataBuilder::new()
                .without_parties()
                .with_pets(pets)
                .with_furniture(furniture)
                .with_rent_update(rent_update)
                .with_inventory(has_inventory)
                .with_monthly_rent(rent)
                .with_payment_method(method)
                .with_guarantee(guarantee, rent)
                .with_community_fees(community, Some(Money::new(Decimal::new(60, 0))))
                .with_ibi(ibi, Some(Money::new(Decimal::new(400, 0))))
                .with_garbage_tax_payer(garbage);

            let groups = [
                (PartyRole::Landlord, landlords),
                (PartyRole::Tenant, tenants),
                (PartyRole::Guarantor, guarantors),
            ];
            for (role, docs) in groups {
                for (i, doc) in docs.into_iter().enumerate() {
                    let name = format!("{} {}", role.legal_name(), i + 1);
                    builder = builder.with_party(Party::identified(role, name, doc));
                }
            }

            builder.build()
        },
    )
}

//! Tests for the identity and banking validators

use domain_lease::checksum::{
    compact_iban, identity_check_letter, identity_kind, iban_length, validate_email,
    validate_iban, validate_identity_number, validate_phone, IdentityKind,
};
use proptest::prelude::*;
use test_utils::{
    valid_dni_strategy, valid_nie_strategy, valid_spanish_iban_strategy,
    wrong_letter_dni_strategy, BankFixtures, IdentityFixtures,
};

// ============================================================================
// DNI / NIE
// ============================================================================

mod identity_numbers {
    use super::*;

    #[test]
    fn test_fixture_numbers_are_valid() {
        for dni in IdentityFixtures::valid_dnis() {
            assert!(validate_identity_number(dni), "{} should be valid", dni);
            assert_eq!(identity_kind(dni), Some(IdentityKind::Dni));
        }
        for nie in IdentityFixtures::valid_nies() {
            assert!(validate_identity_number(nie), "{} should be valid", nie);
            assert_eq!(identity_kind(nie), Some(IdentityKind::Nie));
        }
    }

    #[test]
    fn test_wrong_letter_is_rejected() {
        assert!(!validate_identity_number(IdentityFixtures::wrong_letter_dni()));
    }

    #[test]
    fn test_nie_prefix_changes_letter() {
        // Same digits, different prefix: only one letter is right for each.
        assert!(validate_identity_number("X1234567L"));
        assert!(!validate_identity_number("Y1234567L"));
        assert!(!validate_identity_number("Z1234567L"));
    }

    #[test]
    fn test_check_letter_cycle() {
        assert_eq!(identity_check_letter(12345678), 'Z');
        assert_eq!(identity_check_letter(12345678 + 23), 'Z');
    }

    proptest! {
        #[test]
        fn generated_dni_is_valid(dni in valid_dni_strategy()) {
            prop_assert!(validate_identity_number(&dni));
            prop_assert!(validate_identity_number(&dni.to_lowercase()));
        }

        #[test]
        fn generated_nie_is_valid(nie in valid_nie_strategy()) {
            prop_assert!(validate_identity_number(&nie));
        }

        #[test]
        fn any_other_letter_is_rejected(dni in wrong_letter_dni_strategy()) {
            prop_assert!(!validate_identity_number(&dni));
        }

        #[test]
        fn validator_never_panics(value in "\\PC{0,12}") {
            let _ = validate_identity_number(&value);
        }
    }
}

// ============================================================================
// IBAN
// ============================================================================

mod iban {
    use super::*;

    #[test]
    fn test_fixture_ibans_are_valid() {
        for iban in BankFixtures::valid_ibans() {
            assert!(validate_iban(iban), "{} should be valid", iban);
        }
        assert!(validate_iban(BankFixtures::spaced_iban()));
    }

    #[test]
    fn test_corrupted_iban_is_rejected() {
        assert!(!validate_iban(BankFixtures::corrupted_iban()));
    }

    #[test]
    fn test_compact_iban() {
        assert_eq!(
            compact_iban("es91 2100-0418 4502 0005 1332"),
            "ES9121000418450200051332"
        );
    }

    #[test]
    fn test_unknown_country_uses_default_length() {
        assert_eq!(iban_length("ES"), 24);
        assert_eq!(iban_length("DE"), 24);
        // A German IBAN is 22 characters and is rejected on length.
        assert!(!validate_iban("DE89370400440532013000"));
    }

    proptest! {
        #[test]
        fn generated_iban_is_valid(iban in valid_spanish_iban_strategy()) {
            prop_assert!(validate_iban(&iban));
        }

        #[test]
        fn single_digit_change_is_detected(
            iban in valid_spanish_iban_strategy(),
            position in 4usize..24,
            delta in 1u8..10,
        ) {
            let mut bytes = iban.into_bytes();
            let digit = bytes[position] - b'0';
            bytes[position] = b'0' + (digit + delta) % 10;
            let changed = String::from_utf8(bytes).unwrap();
            prop_assert!(!validate_iban(&changed));
        }

        #[test]
        fn validator_never_panics(value in "\\PC{0,40}") {
            let _ = validate_iban(&value);
        }
    }
}

// ============================================================================
// Email and phone
// ============================================================================

mod contact {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(validate_email("inquilino@example.com"));
        assert!(!validate_email("inquilino@example"));
        assert!(!validate_email("@example.com"));
    }

    #[test]
    fn test_phone_shapes() {
        assert!(validate_phone("699 111 222"));
        assert!(validate_phone("+34 699 111 222"));
        assert!(!validate_phone("+34 599 111 222"));
        assert!(!validate_phone("6991112223"));
    }
}

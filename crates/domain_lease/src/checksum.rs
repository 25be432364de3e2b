//! Identity and banking field validators
//!
//! Pure, total checks for the fields a lease cannot be signed without:
//!
//! - **DNI / NIE**: Spanish national identity numbers. The trailing letter is
//!   a check character taken from a fixed 23-letter alphabet at position
//!   `number mod 23`. NIE numbers replace their leading X / Y / Z with
//!   0 / 1 / 2 before the computation.
//! - **IBAN**: ISO 7064 mod-97 checksum, with Spanish account length.
//! - **Email** and **phone**: format checks only.
//!
//! Every validator returns a plain `bool`. Whether an empty value is
//! acceptable (an optional phone) or an error (a mandatory identity number)
//! is decided by the caller; see [`crate::validation`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Check letters indexed by `number mod 23`
pub const IDENTITY_CHECK_LETTERS: &str = "TRWAGMYFPDXBNJZSQVHLCKE";

/// Length assumed for IBANs of countries without an explicit entry
pub const DEFAULT_IBAN_LENGTH: usize = 24;

static DNI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8}[A-Z]$").expect("valid DNI pattern"));

static NIE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[XYZ][0-9]{7}[A-Z]$").expect("valid NIE pattern"));

static IBAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Z]{2})([0-9]{2})([A-Z0-9]+)$").expect("valid IBAN pattern"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+34|0034|34)?[6789][0-9]{8}$").expect("valid phone pattern"));

/// Shape of a Spanish identity number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityKind {
    /// Documento Nacional de Identidad: 8 digits and a letter
    Dni,
    /// Número de Identidad de Extranjero: X/Y/Z, 7 digits and a letter
    Nie,
}

/// Classifies an identity number by shape, without checking its letter
pub fn identity_kind(value: &str) -> Option<IdentityKind> {
    let normalized = value.trim().to_uppercase();
    if DNI_PATTERN.is_match(&normalized) {
        Some(IdentityKind::Dni)
    } else if NIE_PATTERN.is_match(&normalized) {
        Some(IdentityKind::Nie)
    } else {
        None
    }
}

/// Check letter for the numeric part of a DNI / NIE
pub fn identity_check_letter(number: u32) -> char {
    let index = (number % 23) as usize;
    IDENTITY_CHECK_LETTERS.as_bytes()[index] as char
}

/// Validates a Spanish DNI or NIE, including its check letter
///
/// # Examples
///
/// ```rust
/// use domain_lease::checksum::validate_identity_number;
///
/// assert!(validate_identity_number("12345678Z"));
/// assert!(validate_identity_number(" x1234567l "));
/// assert!(!validate_identity_number("12345678A"));
/// ```
pub fn validate_identity_number(value: &str) -> bool {
    let normalized = value.trim().to_uppercase();

    let numeric = match identity_kind(&normalized) {
        Some(IdentityKind::Dni) => normalized[..8].to_string(),
        Some(IdentityKind::Nie) => {
            let prefix = match normalized.as_bytes()[0] {
                b'X' => '0',
                b'Y' => '1',
                _ => '2',
            };
            format!("{}{}", prefix, &normalized[1..8])
        }
        None => return false,
    };

    match numeric.parse::<u32>() {
        Ok(number) => normalized.ends_with(identity_check_letter(number)),
        Err(_) => false,
    }
}

/// Expected IBAN length for a country code
pub fn iban_length(country: &str) -> usize {
    match country {
        "ES" => 24,
        _ => DEFAULT_IBAN_LENGTH,
    }
}

/// Removes separators and uppercases an IBAN
pub fn compact_iban(value: &str) -> String {
    value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Validates an IBAN with the ISO 7064 mod-97 checksum
///
/// Spaces and other separators are ignored.
///
/// # Examples
///
/// ```rust
/// use domain_lease::checksum::validate_iban;
///
/// assert!(validate_iban("ES91 2100 0418 4502 0005 1332"));
/// assert!(!validate_iban("ES91 2100 0418 4502 0005 1333"));
/// ```
pub fn validate_iban(value: &str) -> bool {
    let iban = compact_iban(value);

    let Some(captures) = IBAN_PATTERN.captures(&iban) else {
        return false;
    };
    let (country, check, bban) = (&captures[1], &captures[2], &captures[3]);

    if iban.len() != iban_length(country) {
        return false;
    }

    let rearranged = format!("{}{}{}", bban, country, check);
    mod97(&letters_to_digits(&rearranged)) == Some(1)
}

/// Replaces every letter with its two-digit value (A = 10 ... Z = 35)
fn letters_to_digits(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                (c as u32 - 55).to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}

/// Remainder of a decimal digit string divided by 97
///
/// The first two digits seed the remainder, then 7-digit chunks are appended
/// and reduced in turn, so intermediate values never exceed nine digits.
fn mod97(digits: &str) -> Option<u64> {
    let (seed, rest) = digits.split_at(digits.len().min(2));
    let mut remainder: u64 = seed.parse().ok()?;

    for chunk in rest.as_bytes().chunks(7) {
        let chunk = std::str::from_utf8(chunk).ok()?;
        let value: u64 = chunk.parse().ok()?;
        remainder = (remainder * 10u64.pow(chunk.len() as u32) + value) % 97;
    }

    Some(remainder)
}

/// Validates the shape `local@domain.tld` with no whitespace
pub fn validate_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validates a Spanish phone number: optional +34 / 0034 / 34 prefix, then
/// nine digits starting with 6, 7, 8 or 9. Internal spaces are ignored.
pub fn validate_phone(value: &str) -> bool {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    PHONE_PATTERN.is_match(&compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dni() {
        assert!(validate_identity_number("12345678Z"));
        assert!(validate_identity_number("00000000T"));
        assert!(validate_identity_number("87654321X"));
    }

    #[test]
    fn test_dni_is_case_and_space_insensitive() {
        assert!(validate_identity_number("  12345678z "));
    }

    #[test]
    fn test_wrong_check_letter() {
        assert!(!validate_identity_number("12345678A"));
        assert!(!validate_identity_number("00000000R"));
    }

    #[test]
    fn test_valid_nie_prefixes() {
        assert!(validate_identity_number("X1234567L"));
        assert!(validate_identity_number("Y1234567X"));
        assert!(validate_identity_number("Z1234567R"));
    }

    #[test]
    fn test_malformed_identity_numbers() {
        assert!(!validate_identity_number(""));
        assert!(!validate_identity_number("1234567Z"));
        assert!(!validate_identity_number("123456789Z"));
        assert!(!validate_identity_number("A1234567L"));
        assert!(!validate_identity_number("12345678"));
        assert!(!validate_identity_number("1234-5678Z"));
    }

    #[test]
    fn test_identity_kind() {
        assert_eq!(identity_kind("12345678Z"), Some(IdentityKind::Dni));
        assert_eq!(identity_kind("y1234567x"), Some(IdentityKind::Nie));
        assert_eq!(identity_kind("hello"), None);
    }

    #[test]
    fn test_check_letter_alphabet() {
        assert_eq!(IDENTITY_CHECK_LETTERS.len(), 23);
        assert_eq!(identity_check_letter(0), 'T');
        assert_eq!(identity_check_letter(22), 'E');
        assert_eq!(identity_check_letter(23), 'T');
    }

    #[test]
    fn test_valid_iban() {
        assert!(validate_iban("ES9121000418450200051332"));
        assert!(validate_iban("ES7921000813610123456789"));
        assert!(validate_iban("es91-2100-0418-4502-0005-1332"));
    }

    #[test]
    fn test_iban_digit_change_is_detected() {
        assert!(!validate_iban("ES9121000418450200051333"));
        assert!(!validate_iban("ES9221000418450200051332"));
    }

    #[test]
    fn test_iban_wrong_length() {
        assert!(!validate_iban("ES912100041845020005133"));
        assert!(!validate_iban("ES91210004184502000513320"));
    }

    #[test]
    fn test_iban_malformed() {
        assert!(!validate_iban(""));
        assert!(!validate_iban("1291210004184502000513321"));
        assert!(!validate_iban("ESAB21000418450200051332"));
    }

    #[test]
    fn test_mod97_rolling_matches_direct_remainder() {
        let digits = "210004184502000513321428";
        let direct = digits.parse::<u128>().unwrap() % 97;
        assert_eq!(mod97(digits), Some(direct as u64));
    }

    #[test]
    fn test_letters_to_digits() {
        assert_eq!(letters_to_digits("ES00"), "142800");
        assert_eq!(letters_to_digits("AZ"), "1035");
    }

    #[test]
    fn test_email() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("ana.garcia+alquiler@correo.example.es"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@@b.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("612345678"));
        assert!(validate_phone("+34612345678"));
        assert!(validate_phone("0034 912 345 678"));
        assert!(validate_phone("34 712345678"));
        assert!(!validate_phone("512345678"));
        assert!(!validate_phone("61234567"));
        assert!(!validate_phone("+33612345678"));
        assert!(!validate_phone(""));
    }
}

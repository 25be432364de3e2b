//! Calendar dates as written in Spanish contracts
//!
//! Contract dates are written out in long form ("15 de marzo de 2024").
//! A date that has not been provided yet renders as a run of underscores so
//! it can be completed by hand on the printed copy.

use chrono::{Datelike, NaiveDate};

/// Placeholder rendered in place of an absent date
pub const DATE_PLACEHOLDER: &str = "_______________";

const MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Returns the Spanish name of a month (1 = enero)
pub fn spanish_month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTHS_ES.get(index as usize))
        .copied()
}

/// Formats a date as "day de month de year"; an absent date renders as
/// [`DATE_PLACEHOLDER`]
pub fn format_long_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => {
            let month = spanish_month_name(date.month()).unwrap_or_default();
            format!("{} de {} de {}", date.day(), month, date.year())
        }
        None => DATE_PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_long_date(Some(date)), "15 de marzo de 2024");
    }

    #[test]
    fn test_day_is_not_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_long_date(Some(date)), "1 de enero de 2025");
    }

    #[test]
    fn test_absent_date_is_placeholder() {
        assert_eq!(format_long_date(None), DATE_PLACEHOLDER);
    }

    #[test]
    fn test_month_names() {
        assert_eq!(spanish_month_name(9), Some("septiembre"));
        assert_eq!(spanish_month_name(0), None);
        assert_eq!(spanish_month_name(13), None);
    }
}

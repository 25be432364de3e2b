//! Money types with precise decimal arithmetic
//!
//! Every amount in a lease (rent, deposit, guarantees, community fees) is a
//! euro amount. This module wraps it in a type-safe `Money` value backed by
//! rust_decimal so that derived figures such as the annual rent never pick up
//! floating-point drift.
//!
//! Amounts become text only through [`format_money`] / [`Money::format_es`],
//! which write figures the way Spanish legal documents do: `.` between
//! thousands, `,` before the decimals and always exactly two decimals.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during money operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Overflow during calculation")]
    Overflow,
}

/// A euro amount
///
/// Amounts are stored with 4 decimal places internally and rounded to cents
/// only when they are displayed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    amount: Decimal,
}

impl Money {
    /// Number of decimals a euro amount is displayed with
    pub const DECIMAL_PLACES: u32 = 2;

    /// Creates a new Money value
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount: amount.round_dp(4),
        }
    }

    /// Creates Money from an integer amount in cents
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, Self::DECIMAL_PLACES))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self { amount: dec!(0) }
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Rounds to whole cents, half away from zero
    pub fn round_to_cents(&self) -> Self {
        Self {
            amount: self
                .amount
                .round_dp_with_strategy(Self::DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero),
        }
    }

    /// Multiplies by a scalar, reporting overflow instead of panicking
    pub fn checked_multiply(&self, factor: Decimal) -> Result<Self, MoneyError> {
        self.amount
            .checked_mul(factor)
            .map(Self::new)
            .ok_or(MoneyError::Overflow)
    }

    /// Formats the amount for a Spanish legal document, e.g. `10.200,00`
    pub fn format_es(&self) -> String {
        let rounded = self.round_to_cents().amount;
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let plain = format!("{:.2}", rounded.abs());
        let (units, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

        format!("{}{},{}", sign, group_thousands(units), cents)
    }
}

/// Formats an optional amount; an absent amount renders as zero
pub fn format_money(amount: Option<Money>) -> String {
    amount.unwrap_or_default().format_es()
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} €", self.format_es())
    }
}

//! Core Kernel - Foundational value types for the lease contract system
//!
//! This crate provides the building blocks shared by the contract domain and
//! its interfaces:
//! - Euro amounts with precise decimal arithmetic and Spanish formatting
//! - Long-form Spanish calendar dates
//! - Placeholder handling for free text left empty in a legal document

pub mod money;
pub mod temporal;
pub mod text;

pub use money::{Money, MoneyError, format_money};
pub use temporal::{format_long_date, DATE_PLACEHOLDER};
pub use text::{or_placeholder, is_blank, TEXT_PLACEHOLDER};

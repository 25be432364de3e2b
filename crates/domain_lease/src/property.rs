//! The leased dwelling and the circumstances of signing

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Property identification plus the place and date the contract is signed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyDetails {
    /// City where the contract is signed
    pub location: String,
    /// Signing date, which is also the start of the lease term
    pub date: Option<NaiveDate>,
    pub address: String,
    /// Annexes let together with the dwelling (garage, storage room)
    pub description: String,
    /// Referencia catastral
    pub catastral_ref: String,
    /// Community-of-owners note
    pub community: String,
    pub habitability_cert: String,
    pub energy_cert: String,
    pub max_occupancy: u32,
    /// Number of key sets handed over at signing
    pub keys_count: u32,
}

impl Default for PropertyDetails {
    fn default() -> Self {
        Self {
            location: String::new(),
            date: None,
            address: String::new(),
            description: String::new(),
            catastral_ref: String::new(),
            community: String::new(),
            habitability_cert: String::new(),
            energy_cert: String::new(),
            max_occupancy: 2,
            keys_count: 2,
        }
    }
}

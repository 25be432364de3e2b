//! Optional lease terms chosen from closed sets of alternatives

use serde::{Deserialize, Serialize};

/// Whether pets may live in the dwelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetPolicy {
    Forbidden,
    Allowed,
}

/// Furniture and kitchen equipment let with the dwelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FurnitureState {
    /// Kitchen not equipped, no furniture
    Empty,
    /// Kitchen equipped, no furniture
    KitchenEquipped,
    /// Kitchen equipped and furnished
    Furnished,
}

impl FurnitureState {
    /// The contract only distinguishes furnished from unfurnished dwellings;
    /// an equipped kitchen already counts as furnished.
    pub fn is_furnished(&self) -> bool {
        match self {
            FurnitureState::Empty => false,
            FurnitureState::KitchenEquipped | FurnitureState::Furnished => true,
        }
    }
}

/// Yearly rent update rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RentUpdatePolicy {
    /// Rent stays fixed for the life of the contract
    #[serde(rename = "no_update")]
    NoUpdate,
    /// Rent follows the consumer price index (or the index replacing it)
    #[serde(rename = "update_irav")]
    IndexUpdate,
    /// Rent follows the index but never goes down
    #[serde(rename = "negative_limit")]
    IndexUpdateFloor,
}

/// Optional terms of the lease
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaseOptions {
    pub pets: PetPolicy,
    pub furniture: FurnitureState,
    pub rent_update: RentUpdatePolicy,
    /// A signed inventory is attached as Annex I
    pub has_inventory: bool,
}

impl Default for LeaseOptions {
    fn default() -> Self {
        Self {
            pets: PetPolicy::Forbidden,
            furniture: FurnitureState::KitchenEquipped,
            rent_update: RentUpdatePolicy::IndexUpdate,
            has_inventory: false,
        }
    }
}

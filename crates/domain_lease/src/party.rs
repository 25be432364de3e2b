//! Contract parties
//!
//! A lease is signed by one or more landlords, one or more tenants and,
//! optionally, guarantors who answer jointly for the tenants' obligations.
//! Several parties may share a role (co-owners, flatmates); the order in
//! which they were entered is the order in which they appear in the document.

use serde::{Deserialize, Serialize};

/// Nationality pre-filled for a new party
pub const DEFAULT_NATIONALITY: &str = "Española";

/// The role a party plays in the lease
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyRole {
    /// Owner letting the property (arrendador)
    Landlord,
    /// Occupant renting the property (arrendatario)
    Tenant,
    /// Joint guarantor of the tenant's obligations (avalista)
    Guarantor,
}

impl PartyRole {
    /// All roles, in the order parties are listed and sign
    pub const ALL: [PartyRole; 3] = [PartyRole::Landlord, PartyRole::Tenant, PartyRole::Guarantor];

    /// Spanish legal name of the role
    pub fn legal_name(&self) -> &'static str {
        match self {
            PartyRole::Landlord => "Arrendador",
            PartyRole::Tenant => "Arrendatario",
            PartyRole::Guarantor => "Avalista",
        }
    }

    /// Collective designation used throughout the clauses, e.g. "Parte Arrendadora"
    pub fn collective_name(&self) -> &'static str {
        match self {
            PartyRole::Landlord => "Parte Arrendadora",
            PartyRole::Tenant => "Parte Arrendataria",
            PartyRole::Guarantor => "Parte Avalista",
        }
    }
}

/// A person taking part in the contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub role: PartyRole,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub address: String,
    /// Spanish DNI or NIE
    #[serde(default)]
    pub doc_number: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl Party {
    /// Creates a blank party slot for the given role
    pub fn new(role: PartyRole) -> Self {
        Self {
            role,
            full_name: String::new(),
            nationality: DEFAULT_NATIONALITY.to_string(),
            address: String::new(),
            doc_number: String::new(),
            phone: String::new(),
            email: String::new(),
        }
    }

    /// Creates a party with a name and identity number
    pub fn identified(
        role: PartyRole,
        full_name: impl Into<String>,
        doc_number: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            doc_number: doc_number.into(),
            ..Self::new(role)
        }
    }

    /// Sets the postal address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the nationality
    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = nationality.into();
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }
}

/// How many parties of each role the contract is prepared for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyCounts {
    pub landlords: usize,
    pub tenants: usize,
    pub guarantors: usize,
}

impl PartyCounts {
    pub fn new(landlords: usize, tenants: usize, guarantors: usize) -> Self {
        Self {
            landlords,
            tenants,
            guarantors,
        }
    }

    /// Number of parties of the given role
    pub fn for_role(&self, role: PartyRole) -> usize {
        match role {
            PartyRole::Landlord => self.landlords,
            PartyRole::Tenant => self.tenants,
            PartyRole::Guarantor => self.guarantors,
        }
    }

    /// Blank party slots, landlords first, then tenants, then guarantors
    pub fn blank_parties(&self) -> Vec<Party> {
        PartyRole::ALL
            .iter()
            .flat_map(|role| std::iter::repeat_with(|| Party::new(*role)).take(self.for_role(*role)))
            .collect()
    }
}

impl Default for PartyCounts {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_party_defaults() {
        let party = Party::new(PartyRole::Tenant);
        assert_eq!(party.nationality, DEFAULT_NATIONALITY);
        assert!(party.full_name.is_empty());
        assert!(party.doc_number.is_empty());
    }

    #[test]
    fn test_identified_party() {
        let party = Party::identified(PartyRole::Landlord, "Ana García", "12345678Z");
        assert_eq!(party.full_name, "Ana García");
        assert_eq!(party.doc_number, "12345678Z");
        assert_eq!(party.nationality, DEFAULT_NATIONALITY);
    }

    #[test]
    fn test_blank_parties_follow_role_order() {
        let parties = PartyCounts::new(2, 1, 1).blank_parties();
        let roles: Vec<_> = parties.iter().map(|p| p.role).collect();
        assert_eq!(
            roles,
            vec![
                PartyRole::Landlord,
                PartyRole::Landlord,
                PartyRole::Tenant,
                PartyRole::Guarantor
            ]
        );
    }

    #[test]
    fn test_default_counts() {
        assert_eq!(PartyCounts::default(), PartyCounts::new(1, 1, 0));
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&PartyRole::Guarantor).unwrap();
        assert_eq!(json, "\"guarantor\"");
    }

    #[test]
    fn test_party_deserializes_camel_case() {
        let json = r#"{"role":"tenant","fullName":"Luis Pérez","docNumber":"X1234567L"}"#;
        let party: Party = serde_json::from_str(json).unwrap();
        assert_eq!(party.full_name, "Luis Pérez");
        assert_eq!(party.doc_number, "X1234567L");
        assert!(party.email.is_empty());
    }

    #[test]
    fn test_party_with_only_a_role() {
        let party: Party = serde_json::from_str(r#"{"role":"tenant"}"#).unwrap();
        assert_eq!(party.role, PartyRole::Tenant);
        assert!(party.full_name.is_empty());
        assert!(party.doc_number.is_empty());
    }
}

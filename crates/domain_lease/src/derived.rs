//! Derived fields
//!
//! Values that are never authored directly but recomputed from other facts
//! every time they are needed:
//!
//! - the annual rent, twelve times the monthly rent;
//! - the ordinal label of every numbered clause. The guarantor clause only
//!   exists when a guarantor signs, and every clause after it moves up one
//!   position when it is absent. Labels are obtained by enumerating the
//!   clauses that are actually included, never by special-casing positions.

use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, MoneyError};

/// Annual rent for a monthly rent
///
/// Fails only when twelve payments exceed the range of `Decimal`.
pub fn compute_annual_rent(monthly_rent: Money) -> Result<Money, MoneyError> {
    monthly_rent.checked_multiply(dec!(12))
}

const ORDINALS_ES: [&str; 20] = [
    "PRIMERA",
    "SEGUNDA",
    "TERCERA",
    "CUARTA",
    "QUINTA",
    "SEXTA",
    "SÉPTIMA",
    "OCTAVA",
    "NOVENA",
    "DÉCIMA",
    "UNDÉCIMA",
    "DUODÉCIMA",
    "DECIMOTERCERA",
    "DECIMOCUARTA",
    "DECIMOQUINTA",
    "DECIMOSEXTA",
    "DECIMOSÉPTIMA",
    "DECIMOCTAVA",
    "DECIMONOVENA",
    "VIGÉSIMA",
];

/// Feminine Spanish ordinal for a 1-based clause number, e.g. `10` -> `DÉCIMA`
pub fn ordinal_label(number: usize) -> String {
    number
        .checked_sub(1)
        .and_then(|index| ORDINALS_ES.get(index))
        .map(|label| label.to_string())
        .unwrap_or_else(|| format!("{}ª", number))
}

/// The numbered clauses of the contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClauseKind {
    ObjectAndPurpose,
    DurationAndRenewal,
    RentAndPayment,
    RentUpdate,
    DepositAndGuarantees,
    Expenses,
    PropertyState,
    HouseRulesAndPets,
    WaiverOfPreferentialRights,
    Guarantor,
    Jurisdiction,
}

/// When a clause is part of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inclusion {
    Always,
    WhenGuarantorsPresent,
}

impl Inclusion {
    pub fn applies(&self, guarantors_present: bool) -> bool {
        match self {
            Inclusion::Always => true,
            Inclusion::WhenGuarantorsPresent => guarantors_present,
        }
    }
}

/// A clause in its fixed position, with its heading and inclusion rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClauseDescriptor {
    pub kind: ClauseKind,
    pub heading: &'static str,
    pub inclusion: Inclusion,
}

/// Every numbered clause in document order
pub const CLAUSE_SEQUENCE: [ClauseDescriptor; 11] = [
    ClauseDescriptor {
        kind: ClauseKind::ObjectAndPurpose,
        heading: "OBJETO Y DESTINO",
        inclusion: Inclusion::Always,
    },
    ClauseDescriptor {
        kind: ClauseKind::DurationAndRenewal,
        heading: "DURACIÓN Y PRÓRROGAS",
        inclusion: Inclusion::Always,
    },
    ClauseDescriptor {
        kind: ClauseKind::RentAndPayment,
        heading: "RENTA Y PAGO",
        inclusion: Inclusion::Always,
    },
    ClauseDescriptor {
        kind: ClauseKind::RentUpdate,
        heading: "ACTUALIZACIÓN DE LA RENTA",
        inclusion: Inclusion::Always,
    },
    ClauseDescriptor {
        kind: ClauseKind::DepositAndGuarantees,
        heading: "FIANZA LEGAL Y GARANTÍAS",
        inclusion: Inclusion::Always,
    },
    ClauseDescriptor {
        kind: ClauseKind::Expenses,
        heading: "GASTOS INDIVIDUALES Y GENERALES",
        inclusion: Inclusion::Always,
    },
    ClauseDescriptor {
        kind: ClauseKind::PropertyState,
        heading: "ESTADO DE LA VIVIENDA, OBRAS Y CONSERVACIÓN",
        inclusion: Inclusion::Always,
    },
    ClauseDescriptor {
        kind: ClauseKind::HouseRulesAndPets,
        heading: "NORMAS DE CONVIVENCIA Y ANIMALES",
        inclusion: Inclusion::Always,
    },
    ClauseDescriptor {
        kind: ClauseKind::WaiverOfPreferentialRights,
        heading: "RENUNCIA A DERECHOS",
        inclusion: Inclusion::Always,
    },
    ClauseDescriptor {
        kind: ClauseKind::Guarantor,
        heading: "AVALISTA",
        inclusion: Inclusion::WhenGuarantorsPresent,
    },
    ClauseDescriptor {
        kind: ClauseKind::Jurisdiction,
        heading: "JURISDICCIÓN",
        inclusion: Inclusion::Always,
    },
];

/// A clause that made it into the document, with its computed position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedClause {
    pub descriptor: ClauseDescriptor,
    /// 1-based position among the included clauses
    pub number: usize,
    pub label: String,
}

impl NumberedClause {
    pub fn kind(&self) -> ClauseKind {
        self.descriptor.kind
    }

    /// Full clause title, e.g. `DÉCIMA.- JURISDICCIÓN.`
    pub fn title(&self) -> String {
        format!("{}.- {}.", self.label, self.descriptor.heading)
    }
}

/// Included clauses with their ordinal labels
pub fn clause_ordinals(guarantors_present: bool) -> Vec<NumberedClause> {
    CLAUSE_SEQUENCE
        .iter()
        .filter(|descriptor| descriptor.inclusion.applies(guarantors_present))
        .enumerate()
        .map(|(index, descriptor)| NumberedClause {
            descriptor: *descriptor,
            number: index + 1,
            label: ordinal_label(index + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label_of(clauses: &[NumberedClause], kind: ClauseKind) -> Option<&str> {
        clauses
            .iter()
            .find(|c| c.kind() == kind)
            .map(|c| c.label.as_str())
    }

    #[test]
    fn test_annual_rent() {
        assert_eq!(compute_annual_rent(Money::new(dec!(850))), Ok(Money::new(dec!(10200))));
        assert_eq!(compute_annual_rent(Money::zero()), Ok(Money::zero()));
        assert_eq!(
            compute_annual_rent(Money::new(dec!(733.33))).map(|m| m.amount()),
            Ok(dec!(8799.96))
        );
    }

    #[test]
    fn test_annual_rent_out_of_range() {
        let huge = Money::new(rust_decimal::Decimal::MAX);
        assert_eq!(compute_annual_rent(huge), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_ordinal_labels() {
        assert_eq!(ordinal_label(1), "PRIMERA");
        assert_eq!(ordinal_label(10), "DÉCIMA");
        assert_eq!(ordinal_label(11), "UNDÉCIMA");
        assert_eq!(ordinal_label(21), "21ª");
        assert_eq!(ordinal_label(0), "0ª");
    }

    #[test]
    fn test_jurisdiction_shifts_without_guarantors() {
        let with = clause_ordinals(true);
        let without = clause_ordinals(false);

        assert_eq!(with.len(), 11);
        assert_eq!(without.len(), 10);
        assert_eq!(label_of(&with, ClauseKind::Jurisdiction), Some("UNDÉCIMA"));
        assert_eq!(label_of(&without, ClauseKind::Jurisdiction), Some("DÉCIMA"));
        assert_eq!(label_of(&with, ClauseKind::Guarantor), Some("DÉCIMA"));
        assert_eq!(label_of(&without, ClauseKind::Guarantor), None);
    }

    #[test]
    fn test_clauses_before_guarantor_keep_their_label() {
        let with = clause_ordinals(true);
        let without = clause_ordinals(false);

        for (a, b) in with.iter().zip(without.iter()).take(9) {
            assert_eq!(a.kind(), b.kind());
            assert_eq!(a.label, b.label);
        }
    }

    #[test]
    fn test_numbers_are_contiguous() {
        for present in [true, false] {
            let numbers: Vec<_> = clause_ordinals(present).iter().map(|c| c.number).collect();
            let expected: Vec<_> = (1..=numbers.len()).collect();
            assert_eq!(numbers, expected);
        }
    }

    #[test]
    fn test_title_format() {
        let clauses = clause_ordinals(false);
        assert_eq!(clauses[0].title(), "PRIMERA.- OBJETO Y DESTINO.");
        assert_eq!(clauses[9].title(), "DÉCIMA.- JURISDICCIÓN.");
    }
}

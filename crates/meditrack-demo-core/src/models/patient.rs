//! Demo patient roster.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Names of the three demo patients, in roster order.
///
/// Generators key their seeds on these names, so the list and its order are
/// load-bearing for reproducibility.
pub const PATIENT_NAMES: [&str; 3] = ["John Doe", "Jane Smith", "Mary Johnson"];

/// A demo patient as surfaced by the dashboard.
///
/// Purely synthetic; the id is a name-based UUID so it stays stable across
/// calls without any storage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoPatient {
    /// Deterministic UUID derived from the name
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Date of birth, YYYY-MM-DD
    pub date_of_birth: String,
    /// Headline condition shown on the patient card
    pub primary_condition: String,
}

impl DemoPatient {
    /// Build a roster patient from fixed demographic fields.
    fn new(name: &str, date_of_birth: &str, primary_condition: &str) -> Self {
        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()),
            name: name.to_string(),
            date_of_birth: date_of_birth.to_string(),
            primary_condition: primary_condition.to_string(),
        }
    }
}

/// The full demo roster, in the same order as [`PATIENT_NAMES`].
pub fn roster() -> Vec<DemoPatient> {
    vec![
        DemoPatient::new("John Doe", "1962-04-18", "Essential hypertension"),
        DemoPatient::new("Jane Smith", "1975-09-02", "Type 2 diabetes mellitus"),
        DemoPatient::new("Mary Johnson", "1958-12-27", "Iron deficiency anemia"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_matches_names() {
        let roster = roster();
        assert_eq!(roster.len(), PATIENT_NAMES.len());
        for (patient, name) in roster.iter().zip(PATIENT_NAMES) {
            assert_eq!(patient.name, name);
        }
    }

    #[test]
    fn test_ids_stable_across_calls() {
        let first = roster();
        let second = roster();
        assert_eq!(first, second);
    }

    #[test]
    fn test_ids_distinct() {
        let roster = roster();
        assert_ne!(roster[0].id, roster[1].id);
        assert_ne!(roster[1].id, roster[2].id);
    }
}

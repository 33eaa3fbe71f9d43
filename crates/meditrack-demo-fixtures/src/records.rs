//! Mock clinical records for the demo roster.
//!
//! All data here is hardcoded and fictional; it stands in for a real records
//! backend in the dashboard demo. No real patient identifiers are present.

use serde::{Deserialize, Serialize};

use meditrack_demo_core::models::{roster, DemoPatient};

/// A mock clinical record for one roster patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientRecord {
    /// The roster patient this record belongs to
    pub patient: DemoPatient,
    /// Diagnosed conditions with ICD-10-style codes
    pub conditions: Vec<Condition>,
    /// Current medications
    pub medications: Vec<Medication>,
    /// Most recent vitals
    pub vitals: Vitals,
    /// Recent clinical notes
    pub notes: Vec<ClinicalNote>,
    /// Last update date, YYYY-MM-DD
    pub last_updated: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Condition {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medication {
    pub name: String,
    pub dose: String,
    pub frequency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vitals {
    pub heart_rate_bpm: u32,
    pub blood_pressure: String,
    pub spo2_percent: u32,
    pub temperature_c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClinicalNote {
    pub date: String,
    pub author: String,
    pub department: String,
    pub text: String,
}

impl Condition {
    fn new(code: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            description: description.to_string(),
        }
    }
}

impl Medication {
    fn new(name: &str, dose: &str, frequency: &str) -> Self {
        Self {
            name: name.to_string(),
            dose: dose.to_string(),
            frequency: frequency.to_string(),
        }
    }
}

impl Vitals {
    fn new(heart_rate_bpm: u32, blood_pressure: &str, spo2_percent: u32, temperature_c: f64) -> Self {
        Self {
            heart_rate_bpm,
            blood_pressure: blood_pressure.to_string(),
            spo2_percent,
            temperature_c,
        }
    }
}

impl ClinicalNote {
    fn new(date: &str, author: &str, department: &str, text: &str) -> Self {
        Self {
            date: date.to_string(),
            author: author.to_string(),
            department: department.to_string(),
            text: text.to_string(),
        }
    }
}

/// One mock record per roster patient, in roster order.
pub fn all_records() -> Vec<PatientRecord> {
    roster().into_iter().map(record_for).collect()
}

/// Build the fixed mock record for a roster patient.
///
/// Patients not in the roster get a minimal record with empty history, which
/// keeps the function total for UI code that passes arbitrary names through.
pub fn record_for(patient: DemoPatient) -> PatientRecord {
    match patient.name.as_str() {
        "John Doe" => PatientRecord {
            patient,
            conditions: vec![
                Condition::new("I10", "Essential hypertension"),
                Condition::new("E78.5", "Hyperlipidemia, unspecified"),
            ],
            medications: vec![
                Medication::new("Lisinopril", "10 mg", "once daily"),
                Medication::new("Atorvastatin", "20 mg", "once daily"),
            ],
            vitals: Vitals::new(76, "142/90", 98, 36.7),
            notes: vec![ClinicalNote::new(
                "2025-09-12",
                "Dr. A. Rivera",
                "Internal Medicine",
                "Blood pressure remains above target despite adherence. \
                 Increased lisinopril to 10 mg daily. Recheck in six weeks.",
            )],
            last_updated: "2025-09-12".to_string(),
        },
        "Jane Smith" => PatientRecord {
            patient,
            conditions: vec![Condition::new(
                "E11.9",
                "Type 2 diabetes mellitus without complications",
            )],
            medications: vec![Medication::new("Metformin", "500 mg", "twice daily")],
            vitals: Vitals::new(68, "118/76", 99, 36.5),
            notes: vec![ClinicalNote::new(
                "2025-10-03",
                "Dr. K. Osei",
                "Endocrinology",
                "HbA1c 6.9%, improved from 7.4%. Continue current regimen, \
                 repeat labs in three months.",
            )],
            last_updated: "2025-10-03".to_string(),
        },
        "Mary Johnson" => PatientRecord {
            patient,
            conditions: vec![Condition::new(
                "D50.9",
                "Iron deficiency anemia, unspecified",
            )],
            medications: vec![Medication::new("Ferrous sulfate", "325 mg", "once daily")],
            vitals: Vitals::new(82, "126/82", 97, 36.8),
            notes: vec![ClinicalNote::new(
                "2025-08-21",
                "Dr. A. Rivera",
                "Internal Medicine",
                "Hemoglobin 10.2 g/dL, consistent with mild anemia. Started \
                 oral iron supplementation; recheck CBC in four weeks.",
            )],
            last_updated: "2025-08-21".to_string(),
        },
        _ => PatientRecord {
            patient,
            conditions: Vec::new(),
            medications: Vec::new(),
            vitals: Vitals::new(72, "120/80", 98, 36.6),
            notes: Vec::new(),
            last_updated: "2025-01-01".to_string(),
        },
    }
}

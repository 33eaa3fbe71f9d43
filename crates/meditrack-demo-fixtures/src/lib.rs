//! MediTrack Demo Data — Fixture Bundles
//!
//! Assembles everything the dashboard frontend needs into a set of JSON
//! files: per-patient mock clinical records and pre-rendered schedule months.
//! The schedule content is fully deterministic, so regenerating a bundle
//! always produces the same data (only the embedded timestamps move).
//!
//! # Modules
//!
//! - [`records`]: hardcoded fictional clinical records for the demo roster

pub mod records;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use meditrack_demo_core::schedule::{DEMO_WINDOW_END_YEAR, DEMO_WINDOW_START_YEAR};
use meditrack_demo_core::{Month, ScheduleExport};

use records::{all_records, PatientRecord};

/// Fixture assembly and write errors.
#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A complete fixture bundle for the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureBundle {
    /// Bundle build timestamp (RFC 3339)
    pub generated_at: String,
    /// Mock clinical records, one per roster patient
    pub records: Vec<PatientRecord>,
    /// Pre-rendered schedule months
    pub schedule: Vec<ScheduleExport>,
}

impl FixtureBundle {
    /// Assemble the default bundle: roster records plus the four demo-window
    /// months the dashboard opens on.
    pub fn assemble() -> Self {
        Self::with_months(&[
            (Month::November, DEMO_WINDOW_START_YEAR),
            (Month::December, DEMO_WINDOW_START_YEAR),
            (Month::January, DEMO_WINDOW_END_YEAR),
            (Month::February, DEMO_WINDOW_END_YEAR),
        ])
    }

    /// Assemble a bundle covering the given months.
    pub fn with_months(months: &[(Month, i32)]) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            records: all_records(),
            schedule: months
                .iter()
                .map(|&(month, year)| ScheduleExport::for_month(month, year))
                .collect(),
        }
    }

    /// Total event count across all bundled months.
    pub fn event_count(&self) -> usize {
        self.schedule.iter().map(|export| export.events.len()).sum()
    }

    /// Write the bundle into `dir` as one `records.json` plus one
    /// `schedule-YYYY-MM.json` per bundled month.
    ///
    /// Creates `dir` if needed. Returns the written file names.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<String>, FixtureError> {
        fs::create_dir_all(dir)?;
        let mut written = Vec::new();

        let records_path = dir.join("records.json");
        fs::write(&records_path, serde_json::to_string_pretty(&self.records)?)?;
        written.push("records.json".to_string());

        for export in &self.schedule {
            let name = format!("schedule-{}-{:02}.json", export.year, export.month_number);
            fs::write(dir.join(&name), export.to_json()?)?;
            written.push(name);
        }

        Ok(written)
    }
}

//! Schedule export for fixture files and debugging dumps.

use serde::{Deserialize, Serialize};

use crate::models::{CalendarEvent, EventKind, Month};
use crate::schedule::month_events;

/// A rendered snapshot of one generated month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleExport {
    /// Abbreviated month name
    pub month: String,
    /// 1-based calendar month number, for filenames and sorting
    pub month_number: u32,
    /// Calendar year
    pub year: i32,
    /// Export timestamp (RFC 3339)
    pub exported_at: String,
    /// Appointment-kind event count
    pub appointment_count: usize,
    /// Test-kind event count
    pub test_count: usize,
    /// The generated events, day-ascending
    pub events: Vec<CalendarEvent>,
}

impl ScheduleExport {
    /// Generate and snapshot one month.
    pub fn for_month(month: Month, year: i32) -> Self {
        let events = month_events(month, year);
        let appointment_count = events
            .iter()
            .filter(|e| e.kind == EventKind::Appointment)
            .count();
        let test_count = events.len() - appointment_count;
        Self {
            month: month.abbrev().to_string(),
            month_number: month.number(),
            year,
            exported_at: chrono::Utc::now().to_rfc3339(),
            appointment_count,
            test_count,
            events,
        }
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Export to CSV, one row per event.
    pub fn to_csv(&self) -> String {
        let mut csv = String::new();
        csv.push_str("id,day,month,type,title,patient,time,specialty\n");
        for event in &self.events {
            let kind = match event.kind {
                EventKind::Appointment => "appointment",
                EventKind::Test => "test",
            };
            csv.push_str(&format!(
                "{},{},{},{},{},{},{},{}\n",
                event.id,
                event.day,
                escape_csv(&event.month),
                kind,
                escape_csv(&event.title),
                escape_csv(&event.patient),
                escape_csv(&event.time),
                escape_csv(&event.specialty),
            ));
        }
        csv
    }
}

/// Escape a string for CSV output.
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

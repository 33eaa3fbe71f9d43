//! Calendar event model.

use serde::{Deserialize, Serialize};

use super::Month;

/// Kind of a generated calendar event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Scheduled appointment with a specialist
    Appointment,
    /// Lab test or screening
    Test,
}

/// A synthetic calendar event.
///
/// Constructed fresh on every generation call and never mutated afterwards;
/// nothing here is persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarEvent {
    /// Sequential id within one generation call
    pub id: u32,
    /// Day of month (1-based)
    pub day: u32,
    /// Abbreviated month name ("Jan".."Dec")
    pub month: String,
    /// Event kind, serialized as "type"
    #[serde(rename = "type")]
    pub kind: EventKind,
    /// Display title
    pub title: String,
    /// Patient name from the demo roster
    pub patient: String,
    /// Time slot, "H:MM AM/PM"
    pub time: String,
    /// Specialty or facility label
    pub specialty: String,
}

impl CalendarEvent {
    /// Check whether this event falls in the given month.
    pub fn is_in_month(&self, month: Month) -> bool {
        self.month == month.abbrev()
    }
}

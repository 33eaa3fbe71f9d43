//! MediTrack Demo Data — Core Library
//!
//! Deterministic synthetic schedule generation for the MediTrack dashboard.
//! Every "random" choice derives from a string-keyed hash, so the same
//! (month, year) inputs reproduce the same event list on every call, with no
//! stored state of any kind.
//!
//! # Architecture
//!
//! ```text
//! seed key "{year}-{month}-{day}[-{patient}]"
//!        │
//!   seed_hash ──► fraction / pick / spread
//!        │
//! ┌──────▼───────────────┐     delegation      ┌───────────────────────┐
//! │ month_events         │◄────(Nov-Feb)──────►│ window_events         │
//! │ cap: 2/patient/week  │                     │ cap: 3/week global    │
//! └──────┬───────────────┘                     └───────────┬───────────┘
//!        │                                                 │
//!        └──────────► view (bucket/filter) ◄───────────────┘
//!                     export (JSON/CSV)
//! ```
//!
//! # Core Principle
//!
//! **Generators are pure.** No clocks, no RNG state, no caches; all weekly
//! counters live in call-local maps.
//!
//! # Modules
//!
//! - [`hash`]: string-seeded deterministic hashing
//! - [`models`]: domain types (CalendarEvent, Month, demo roster)
//! - [`schedule`]: the month and demo-window generators
//! - [`view`]: day-bucketing and filtering for the widgets
//! - [`export`]: JSON/CSV snapshots of generated months

pub mod export;
pub mod hash;
pub mod models;
pub mod schedule;
pub mod view;

// Re-export commonly used items
pub use export::ScheduleExport;
pub use models::{CalendarEvent, DemoPatient, EventKind, Month, PATIENT_NAMES};
pub use schedule::{
    demo_window_events, in_demo_window, month_events, month_events_by_index, window_events,
};

/// Errors at the library boundary.
///
/// The generators themselves never fail; only index conversion at the API
/// edge can.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("month index out of range (expected 0-11): {0}")]
    InvalidMonthIndex(u32),
}

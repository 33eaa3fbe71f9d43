//! Deterministic schedule generators.
//!
//! Two generators feed the dashboard calendar:
//!
//! - [`month_events`]: one calendar month, appointments capped at 2 per
//!   patient per ISO week plus uncapped lab-test events.
//! - [`window_events`]: the multi-month demo window (November through
//!   February), appointments capped at 3 per ISO week across all patients.
//!
//! The two cap policies intentionally diverge. Months inside the demo window
//! are served by delegating to the window generator and filtering, so the
//! window's global cap wins there.

mod month;
mod window;

pub use month::*;
pub use window::*;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::Month;

/// First year of the hard-coded demo window (November onward).
pub const DEMO_WINDOW_START_YEAR: i32 = 2025;

/// Last year of the demo window (through February).
pub const DEMO_WINDOW_END_YEAR: i32 = 2026;

/// Last month of the demo window.
pub const DEMO_WINDOW_END_MONTH: Month = Month::February;

/// Appointment titles, indexed by seed.
pub(crate) const APPOINTMENT_TITLES: [&str; 5] = [
    "Check-up",
    "Consultation",
    "Follow-up",
    "Physical Exam",
    "Medication Review",
];

/// Lab-test titles, indexed by seed.
pub(crate) const TEST_TITLES: [&str; 5] = [
    "Blood Panel",
    "X-Ray",
    "MRI Scan",
    "Urinalysis",
    "EKG",
];

/// Specialty labels, indexed by seed.
pub(crate) const SPECIALTIES: [&str; 5] = [
    "Cardiology",
    "Dermatology",
    "General Practice",
    "Orthopedics",
    "Neurology",
];

/// Appointment time slots, "H:MM AM/PM".
pub(crate) const TIME_SLOTS: [&str; 6] = [
    "9:00 AM",
    "10:30 AM",
    "11:15 AM",
    "1:30 PM",
    "2:45 PM",
    "4:00 PM",
];

/// Morning slots used for lab-test events.
pub(crate) const MORNING_SLOTS: [&str; 4] = ["8:00 AM", "8:30 AM", "9:15 AM", "10:45 AM"];

/// Check whether (month, year) falls inside the demo window.
pub fn in_demo_window(month: Month, year: i32) -> bool {
    (year == DEMO_WINDOW_START_YEAR
        && matches!(month, Month::November | Month::December))
        || (year == DEMO_WINDOW_END_YEAR
            && matches!(month, Month::January | Month::February))
}

/// ISO week key (Monday-aligned), the unit over which caps are counted.
pub(crate) fn week_key(date: NaiveDate) -> (i32, u32) {
    let week = date.iso_week();
    (week.year(), week.week())
}

pub(crate) fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_window_membership() {
        assert!(in_demo_window(Month::November, 2025));
        assert!(in_demo_window(Month::December, 2025));
        assert!(in_demo_window(Month::January, 2026));
        assert!(in_demo_window(Month::February, 2026));

        assert!(!in_demo_window(Month::October, 2025));
        assert!(!in_demo_window(Month::March, 2026));
        assert!(!in_demo_window(Month::December, 2024));
        assert!(!in_demo_window(Month::January, 2025));
    }

    #[test]
    fn test_week_key_monday_aligned() {
        // 2024-01-01 is a Monday; the whole week shares one key.
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let next_monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();

        assert_eq!(week_key(monday), week_key(friday));
        assert_ne!(week_key(monday), week_key(next_monday));
    }

    #[test]
    fn test_weekend_detection() {
        // 2024-01-06 is a Saturday
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()));
    }

    #[test]
    fn test_all_slots_have_meridiem() {
        for slot in TIME_SLOTS.iter().chain(MORNING_SLOTS.iter()) {
            assert!(slot.ends_with(" AM") || slot.ends_with(" PM"));
            assert!(slot.contains(':'));
        }
    }
}

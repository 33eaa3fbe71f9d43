//! Single-month event generation.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::hash::{fraction, pick, seed_hash, spread};
use crate::models::{CalendarEvent, EventKind, Month, PATIENT_NAMES};
use crate::ScheduleError;

use super::{
    demo_window_events, in_demo_window, is_weekend, week_key, APPOINTMENT_TITLES,
    MORNING_SLOTS, SPECIALTIES, TEST_TITLES, TIME_SLOTS,
};

/// Probability threshold for emitting a per-patient appointment on a weekday.
const APPOINTMENT_CHANCE: f64 = 0.4;

/// Probability threshold for emitting a lab-test event on a weekday.
const TEST_CHANCE: f64 = 0.3;

/// Maximum appointments per patient per ISO week.
const WEEKLY_CAP_PER_PATIENT: u32 = 2;

/// Generate the synthetic events for one calendar month.
///
/// Pure: identical (month, year) inputs reproduce the identical list, in the
/// same order, on every call. Always returns a list; an empty one simply
/// renders an empty calendar.
///
/// Months inside the demo window are not generated independently: the window
/// generator runs for the whole November–February span and its output is
/// filtered down to the requested month. Each calendar month occurs exactly
/// once in the window, so the month abbreviation identifies the subset.
pub fn month_events(month: Month, year: i32) -> Vec<CalendarEvent> {
    if in_demo_window(month, year) {
        return demo_window_events()
            .into_iter()
            .filter(|event| event.is_in_month(month))
            .collect();
    }

    let mut events = Vec::new();
    let mut next_id = 0u32;
    // (patient index, ISO week) -> appointments already booked
    let mut booked: HashMap<(usize, (i32, u32)), u32> = HashMap::new();

    for day in 1..=31u32 {
        let Some(date) = NaiveDate::from_ymd_opt(year, month.number(), day) else {
            continue;
        };
        if is_weekend(date) {
            continue;
        }
        let week = week_key(date);

        for (patient_idx, patient) in PATIENT_NAMES.iter().enumerate() {
            let seed = seed_hash(&format!("{}-{}-{}-{}", year, month.index(), day, patient));
            let count = booked.entry((patient_idx, week)).or_insert(0);
            if *count < WEEKLY_CAP_PER_PATIENT && fraction(seed) < APPOINTMENT_CHANCE {
                *count += 1;
                events.push(CalendarEvent {
                    id: next_id,
                    day,
                    month: month.abbrev().to_string(),
                    kind: EventKind::Appointment,
                    title: pick(spread(seed, 7), &APPOINTMENT_TITLES).to_string(),
                    patient: patient.to_string(),
                    time: pick(spread(seed, 17), &TIME_SLOTS).to_string(),
                    specialty: pick(spread(seed, 13), &SPECIALTIES).to_string(),
                });
                next_id += 1;
            }
        }

        // Lab tests are emitted independently and do not count against (or
        // consult) the weekly appointment cap. Longstanding behavior the
        // calendar demo relies on; do not merge with the branch above.
        let test_seed = seed_hash(&format!("test-{}-{}-{}", year, month.index(), day));
        if fraction(test_seed) < TEST_CHANCE {
            events.push(CalendarEvent {
                id: next_id,
                day,
                month: month.abbrev().to_string(),
                kind: EventKind::Test,
                title: pick(spread(test_seed, 13), &TEST_TITLES).to_string(),
                patient: pick(spread(test_seed, 7), &PATIENT_NAMES).to_string(),
                time: pick(test_seed, &MORNING_SLOTS).to_string(),
                specialty: pick(spread(test_seed, 17), &SPECIALTIES).to_string(),
            });
            next_id += 1;
        }
    }

    // Stable: ties keep emission order within a day.
    events.sort_by_key(|event| event.day);
    events
}

/// [`month_events`] addressed by 0-based month index, as the widgets call it.
pub fn month_events_by_index(
    month_index: u32,
    year: i32,
) -> Result<Vec<CalendarEvent>, ScheduleError> {
    Ok(month_events(Month::from_index(month_index)?, year))
}

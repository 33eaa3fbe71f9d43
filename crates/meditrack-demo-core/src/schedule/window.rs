//! Multi-month demo-window generation.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::hash::{fraction, pick, seed_hash, spread};
use crate::models::{CalendarEvent, EventKind, Month, ALL_MONTHS, PATIENT_NAMES};

use super::{
    is_weekend, week_key, APPOINTMENT_TITLES, DEMO_WINDOW_END_MONTH, DEMO_WINDOW_END_YEAR,
    DEMO_WINDOW_START_YEAR, SPECIALTIES, TIME_SLOTS,
};

/// Appointments guaranteed-eligible per ISO week before the chance gate.
const WEEKLY_BASE: u32 = 2;

/// Hard weekly ceiling across all patients.
const WEEKLY_CAP: u32 = 3;

/// Probability threshold for admitting the third appointment of a week.
const EXTRA_CHANCE: f64 = 0.3;

/// Generate the appointment stream from November of `start_year` through
/// `end_month` of `end_year`, inclusive.
///
/// Unlike [`month_events`](super::month_events), the weekly cap here is
/// global: at most [`WEEKLY_CAP`] appointments per ISO week across the whole
/// roster, with no per-patient bound. Downstream code must not assume the two
/// generators share a capping policy.
pub fn window_events(start_year: i32, end_month: Month, end_year: i32) -> Vec<CalendarEvent> {
    let mut events = Vec::new();
    let mut next_id = 0u32;
    // ISO week -> appointments already emitted, all patients combined
    let mut weekly: HashMap<(i32, u32), u32> = HashMap::new();

    for (year, month) in window_months(start_year, end_month, end_year) {
        for day in 1..=31u32 {
            let Some(date) = NaiveDate::from_ymd_opt(year, month.number(), day) else {
                continue;
            };
            if is_weekend(date) {
                continue;
            }

            let seed = seed_hash(&format!("{}-{}-{}", year, month.index(), day));
            let count = weekly.entry(week_key(date)).or_insert(0);
            let admit = if *count < WEEKLY_BASE {
                true
            } else if *count < WEEKLY_CAP {
                fraction(seed) < EXTRA_CHANCE
            } else {
                false
            };
            if !admit {
                continue;
            }
            *count += 1;

            events.push(CalendarEvent {
                id: next_id,
                day,
                month: month.abbrev().to_string(),
                kind: EventKind::Appointment,
                title: pick(seed, &APPOINTMENT_TITLES).to_string(),
                patient: pick(spread(seed, 13), &PATIENT_NAMES).to_string(),
                time: pick(spread(seed, 17), &TIME_SLOTS).to_string(),
                specialty: pick(spread(seed, 7), &SPECIALTIES).to_string(),
            });
            next_id += 1;
        }
    }

    events
}

/// The hard-coded demo window: November 2025 through February 2026.
pub fn demo_window_events() -> Vec<CalendarEvent> {
    window_events(
        DEMO_WINDOW_START_YEAR,
        DEMO_WINDOW_END_MONTH,
        DEMO_WINDOW_END_YEAR,
    )
}

/// The year a window event belongs to, inferred from its month position
/// (November and December sit in the start year, January onward in the end
/// year).
pub fn window_event_year(month: Month, start_year: i32, end_year: i32) -> i32 {
    match month {
        Month::November | Month::December => start_year,
        _ => end_year,
    }
}

/// Months covered by the window, in chronological order.
fn window_months(start_year: i32, end_month: Month, end_year: i32) -> Vec<(i32, Month)> {
    let mut months = Vec::new();
    let mut year = start_year;
    let mut month = Month::November;
    while year < end_year || (year == end_year && month.index() <= end_month.index()) {
        months.push((year, month));
        if month == Month::December {
            month = Month::January;
            year += 1;
        } else {
            month = ALL_MONTHS[month.index() as usize + 1];
        }
    }
    months
}

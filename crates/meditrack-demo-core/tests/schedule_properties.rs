//! Property tests over arbitrary (month, year) inputs.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use proptest::prelude::*;

use meditrack_demo_core::{in_demo_window, month_events, EventKind, Month, PATIENT_NAMES};

fn any_month() -> impl Strategy<Value = Month> {
    (0u32..12).prop_map(|i| Month::from_index(i).unwrap())
}

proptest! {
    #[test]
    fn prop_deterministic(month in any_month(), year in 2000i32..2050) {
        prop_assert_eq!(month_events(month, year), month_events(month, year));
    }

    #[test]
    fn prop_no_weekend_events(month in any_month(), year in 2000i32..2050) {
        for event in month_events(month, year) {
            let date = NaiveDate::from_ymd_opt(year, month.number(), event.day).unwrap();
            let weekday = date.weekday();
            prop_assert!(weekday != Weekday::Sat && weekday != Weekday::Sun);
        }
    }

    #[test]
    fn prop_sorted_by_day(month in any_month(), year in 2000i32..2050) {
        let events = month_events(month, year);
        for pair in events.windows(2) {
            prop_assert!(pair[0].day <= pair[1].day);
        }
    }

    #[test]
    fn prop_patients_from_roster(month in any_month(), year in 2000i32..2050) {
        for event in month_events(month, year) {
            prop_assert!(PATIENT_NAMES.contains(&event.patient.as_str()));
        }
    }

    /// The 2-per-patient weekly cap holds only outside the demo window;
    /// delegated months follow the window's global-cap policy instead.
    #[test]
    fn prop_per_patient_weekly_cap(month in any_month(), year in 2000i32..2050) {
        prop_assume!(!in_demo_window(month, year));

        let mut counts: HashMap<(String, (i32, u32)), u32> = HashMap::new();
        for event in month_events(month, year) {
            if event.kind != EventKind::Appointment {
                continue;
            }
            let date = NaiveDate::from_ymd_opt(year, month.number(), event.day).unwrap();
            let week = date.iso_week();
            *counts
                .entry((event.patient, (week.year(), week.week())))
                .or_insert(0) += 1;
        }
        for (_, count) in counts {
            prop_assert!(count <= 2);
        }
    }

    #[test]
    fn prop_days_within_month(month in any_month(), year in 2000i32..2050) {
        for event in month_events(month, year) {
            prop_assert!(event.day >= 1);
            prop_assert!(NaiveDate::from_ymd_opt(year, month.number(), event.day).is_some());
        }
    }
}

//! Consumer-side helpers for the calendar and appointment widgets.
//!
//! The widgets re-derive these views on every interaction; nothing is cached.

use std::collections::BTreeMap;

use crate::models::{CalendarEvent, EventKind};

/// Group events by day-of-month, preserving within-day order.
///
/// `BTreeMap` keeps the calendar grid's days ordered.
pub fn bucket_by_day(events: &[CalendarEvent]) -> BTreeMap<u32, Vec<CalendarEvent>> {
    let mut buckets: BTreeMap<u32, Vec<CalendarEvent>> = BTreeMap::new();
    for event in events {
        buckets.entry(event.day).or_default().push(event.clone());
    }
    buckets
}

/// Events for a single patient, in original order.
pub fn filter_by_patient(events: &[CalendarEvent], patient: &str) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| event.patient == patient)
        .cloned()
        .collect()
}

/// The next `limit` appointments on or after `from_day`.
///
/// Test events are excluded; the appointment list widget shows only
/// appointments.
pub fn upcoming(events: &[CalendarEvent], from_day: u32, limit: usize) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|event| event.kind == EventKind::Appointment && event.day >= from_day)
        .take(limit)
        .cloned()
        .collect()
}

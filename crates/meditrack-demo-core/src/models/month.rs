//! Calendar month with 0-based index conversion.

use serde::{Deserialize, Serialize};

use crate::ScheduleError;

/// A calendar month.
///
/// The dashboard widgets address months by 0-based index (January = 0), so
/// conversion from untrusted indices lives here; everything past this seam
/// works with the validated enum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

/// All months in calendar order.
pub const ALL_MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// Convert a 0-based month index (0 = January) into a month.
    pub fn from_index(index: u32) -> Result<Self, ScheduleError> {
        ALL_MONTHS
            .get(index as usize)
            .copied()
            .ok_or(ScheduleError::InvalidMonthIndex(index))
    }

    /// 0-based index (January = 0). Used in seed keys.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// 1-based calendar number (January = 1). Used for date math.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Fixed English abbreviation, as emitted on events.
    pub fn abbrev(self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_valid() {
        assert_eq!(Month::from_index(0).unwrap(), Month::January);
        assert_eq!(Month::from_index(11).unwrap(), Month::December);
    }

    #[test]
    fn test_from_index_invalid() {
        assert!(matches!(
            Month::from_index(12),
            Err(ScheduleError::InvalidMonthIndex(12))
        ));
    }

    #[test]
    fn test_index_round_trip() {
        for month in ALL_MONTHS {
            assert_eq!(Month::from_index(month.index()).unwrap(), month);
            assert_eq!(month.number(), month.index() + 1);
        }
    }

    #[test]
    fn test_abbrevs_are_three_letters() {
        for month in ALL_MONTHS {
            assert_eq!(month.abbrev().len(), 3);
        }
    }
}

use crate::weekslider::{start_of_week, WeekStart};
use chrono::{Days, NaiveDate};
use std::array;

/// Seven consecutive days.
///
/// Two weeks are equal if they start on the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week {
    start: NaiveDate,
}

impl Week {
    /// The week containing the given date.
    pub fn of(date: NaiveDate, week_start: WeekStart) -> Self {
        Self {
            start: start_of_week(date, week_start),
        }
    }

    /// First day.
    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day, start + 6.
    ///
    /// Stops at `NaiveDate::MAX` for the very last representable week.
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.start
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX)
    }

    /// All days in ascending order.
    ///
    /// Stops at `NaiveDate::MAX` like [end](Self::end).
    pub fn days(&self) -> [NaiveDate; 7] {
        array::from_fn(|i| {
            self.start
                .checked_add_days(Days::new(i as u64))
                .unwrap_or(NaiveDate::MAX)
        })
    }

    /// Nth day of the week.
    pub fn day(&self, n: usize) -> Option<NaiveDate> {
        if n < 7 {
            self.start.checked_add_days(Days::new(n as u64))
        } else {
            None
        }
    }

    /// Is the date part of this week.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end()
    }

    /// Week before.
    /// None at the start of the calendar.
    pub fn prev(&self) -> Option<Self> {
        let start = self.start.checked_sub_days(Days::new(7))?;
        Some(Self { start })
    }

    /// Week after.
    /// None if the week would not fit into the calendar.
    pub fn next(&self) -> Option<Self> {
        let start = self.start.checked_add_days(Days::new(7))?;
        start.checked_add_days(Days::new(6))?;
        Some(Self { start })
    }
}

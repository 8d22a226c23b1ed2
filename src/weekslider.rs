//!
//! Week slider.
//!
//! Shows one week at a time with navigation to the previous and
//! next week. Which days can be picked is decided by a
//! [Selectability] rule set.
//!
//! [WeekSliderState] does all the date arithmetic and can be used
//! without ever rendering anything. [WeekSlider] renders it as a
//! single line.
//!

use crate::WeekSliderError;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::str::FromStr;

mod config;
mod constraints;
pub(crate) mod event;
pub mod format;
mod selection;
mod state;
mod style;
mod week;
mod widget;

pub use config::*;
pub use constraints::*;
pub use selection::*;
pub use state::*;
pub use style::*;
pub use week::*;
pub use widget::*;

/// First day of a displayed week.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    /// As chrono weekday.
    pub fn weekday(self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }
}

impl FromStr for WeekStart {
    type Err = WeekSliderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("monday") {
            Ok(WeekStart::Monday)
        } else if s.eq_ignore_ascii_case("sunday") {
            Ok(WeekStart::Sunday)
        } else {
            Err(WeekSliderError::InvalidWeekStart(s.into()))
        }
    }
}

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

/// First day of the week containing `date`.
///
/// Monday start goes back to the last Monday, Sunday start to the
/// last Sunday. A date that already is the first day of its week
/// is returned unchanged.
pub fn start_of_week(date: NaiveDate, week_start: WeekStart) -> NaiveDate {
    let offset = (date.weekday().num_days_from_monday() + 7
        - week_start.weekday().num_days_from_monday())
        % 7;
    date.checked_sub_days(Days::new(offset as u64))
        .unwrap_or(NaiveDate::MIN)
}

/// Parse a `YYYY-MM-DD` date.
///
/// Exactly four digits for the year and two each for month and day.
/// No sign, no whitespace.
pub fn parse_date(s: &str) -> Result<NaiveDate, WeekSliderError> {
    let b = s.as_bytes();
    let well_formed = b.len() == 10
        && b.iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        });
    if !well_formed {
        return Err(WeekSliderError::InvalidDateFormat(s.into()));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| WeekSliderError::InvalidDateFormat(s.into()))
}

//!
//! Date labels.
//!
//! Day and month names come from chrono's locale tables.
//! With the default `Locale::POSIX` they are English.
//!
//! ```
//! use chrono::{Locale, NaiveDate};
//! use rat_weekslider::weekslider::format;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 7, 25).expect("date");
//! assert_eq!(format::display_date(date, Locale::POSIX), "Fri, Jul 25");
//! assert_eq!(format::iso_date(date), "2025-07-25");
//! ```
//!

use crate::WeekSliderError;
use chrono::{Locale, NaiveDate};

/// `2025-07-25`
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `Fri`
pub fn short_weekday(date: NaiveDate, loc: Locale) -> String {
    date.format_localized("%a", loc).to_string()
}

/// `Friday`
pub fn full_weekday(date: NaiveDate, loc: Locale) -> String {
    date.format_localized("%A", loc).to_string()
}

/// `25`, `5`
pub fn day_of_month(date: NaiveDate) -> String {
    date.format("%-d").to_string()
}

/// `Jul 25`
pub fn month_day(date: NaiveDate, loc: Locale) -> String {
    date.format_localized("%b %-d", loc).to_string()
}

/// `Fri, Jul 25`
pub fn display_date(date: NaiveDate, loc: Locale) -> String {
    date.format_localized("%a, %b %-d", loc).to_string()
}

/// `Friday, July 25, 2025`
pub fn long_date(date: NaiveDate, loc: Locale) -> String {
    date.format_localized("%A, %B %-d, %Y", loc).to_string()
}

/// `July 2025`
pub fn month_year(date: NaiveDate, loc: Locale) -> String {
    date.format_localized("%B %Y", loc).to_string()
}

/// `Jul 21 - Jul 27, 2025`
///
/// The year is taken from the start date.
pub fn week_range_label(start: NaiveDate, end: NaiveDate, loc: Locale) -> String {
    format!(
        "{} - {}, {}",
        month_day(start, loc),
        month_day(end, loc),
        start.format("%Y")
    )
}

/// Locale by name, e.g. `en_US` or `de_DE`.
pub fn parse_locale(name: &str) -> Result<Locale, WeekSliderError> {
    Locale::try_from(name).map_err(|_| WeekSliderError::InvalidLocale(name.into()))
}

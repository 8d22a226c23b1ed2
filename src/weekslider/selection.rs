use crate::weekslider::format;
use crate::weekslider::{is_weekend, Week};
use chrono::{Datelike, Locale, NaiveDate};

/// A successful date selection.
///
/// Dates serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WeekSelection {
    pub selected_date: NaiveDate,
    /// First day of the displayed week.
    pub week_start: NaiveDate,
    /// Last day of the displayed week.
    pub week_end: NaiveDate,
    /// 0 = Sunday .. 6 = Saturday
    pub day_of_week: u32,
    /// `Friday`
    pub day_name: String,
    /// `Fri, Jul 25`
    pub display_date: String,
    pub is_today: bool,
    pub is_weekend: bool,
}

impl WeekSelection {
    /// Selection of `date` while `week` is displayed.
    ///
    /// The date need not be part of the week.
    pub fn new(date: NaiveDate, week: Week, today: NaiveDate, loc: Locale) -> Self {
        Self {
            selected_date: date,
            week_start: week.start(),
            week_end: week.end(),
            day_of_week: date.weekday().num_days_from_sunday(),
            day_name: format::full_weekday(date, loc),
            display_date: format::display_date(date, loc),
            is_today: date == today,
            is_weekend: is_weekend(date),
        }
    }
}

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// The rule that keeps a date from being selected.
///
/// Listed in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisabledReason {
    /// Listed in the disabled dates.
    Disabled,
    /// There is an allow-list and the date is not on it.
    NotAvailable,
    /// Before the minimum date.
    BeforeMin,
    /// After the maximum date.
    AfterMax,
    /// Before today.
    Past,
    /// Saturday or Sunday.
    Weekend,
}

/// Which dates can be selected.
///
/// All checks work on calendar days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selectability {
    /// Never selectable.
    pub disabled_dates: HashSet<NaiveDate>,
    /// If set, only these dates are selectable.
    pub available_dates: Option<HashSet<NaiveDate>>,
    /// Inclusive lower bound.
    pub min_date: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub max_date: Option<NaiveDate>,
    /// Saturday and Sunday are not selectable.
    pub exclude_weekends: bool,
    /// Dates before today are not selectable.
    pub exclude_past_dates: bool,
}

impl Default for Selectability {
    fn default() -> Self {
        Self {
            disabled_dates: Default::default(),
            available_dates: None,
            min_date: None,
            max_date: None,
            exclude_weekends: false,
            exclude_past_dates: true,
        }
    }
}

impl Selectability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dates that are never selectable.
    pub fn disabled_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.disabled_dates = dates.into_iter().collect();
        self
    }

    /// Restrict selection to these dates.
    pub fn available_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.available_dates = Some(dates.into_iter().collect());
        self
    }

    /// Inclusive lower bound.
    pub fn min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    /// Inclusive upper bound.
    pub fn max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    pub fn exclude_weekends(mut self, exclude: bool) -> Self {
        self.exclude_weekends = exclude;
        self
    }

    pub fn exclude_past_dates(mut self, exclude: bool) -> Self {
        self.exclude_past_dates = exclude;
        self
    }

    /// The first rule that disables the date, if any.
    pub fn disabled_reason(&self, date: NaiveDate, today: NaiveDate) -> Option<DisabledReason> {
        if self.disabled_dates.contains(&date) {
            Some(DisabledReason::Disabled)
        } else if self
            .available_dates
            .as_ref()
            .is_some_and(|v| !v.contains(&date))
        {
            Some(DisabledReason::NotAvailable)
        } else if self.min_date.is_some_and(|min| date < min) {
            Some(DisabledReason::BeforeMin)
        } else if self.max_date.is_some_and(|max| date > max) {
            Some(DisabledReason::AfterMax)
        } else if self.exclude_past_dates && date < today {
            Some(DisabledReason::Past)
        } else if self.exclude_weekends && is_weekend(date) {
            Some(DisabledReason::Weekend)
        } else {
            None
        }
    }

    /// Can the date be selected.
    #[inline]
    pub fn is_selectable(&self, date: NaiveDate, today: NaiveDate) -> bool {
        self.disabled_reason(date, today).is_none()
    }
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

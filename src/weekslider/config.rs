use crate::weekslider::format::parse_locale;
use crate::weekslider::{parse_date, Selectability, WeekStart};
use crate::WeekSliderError;
use chrono::{Locale, NaiveDate};
use std::collections::{HashMap, HashSet};

/// Configuration as supplied by the host.
///
/// Dates are `YYYY-MM-DD` strings. Use [WeekSliderConfig::resolve] to
/// check and convert everything, or hand it to
/// [WeekSliderState::reconcile](crate::weekslider::WeekSliderState::reconcile)
/// directly.
///
/// With the `serde` feature this reads from a document with
/// camelCase keys, every key is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct WeekSliderConfig {
    /// Externally controlled selection.
    /// A new value here moves the slider to the week of the date.
    pub selected_date: Option<String>,
    pub disabled_dates: Vec<String>,
    /// If set, only these dates are selectable.
    pub available_dates: Option<Vec<String>>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    /// Show the week range label.
    pub show_week_range: bool,
    pub exclude_weekends: bool,
    pub exclude_past_dates: bool,
    /// Highlight today if there is no selected date.
    pub highlight_today: bool,
    pub week_starts_on: WeekStart,
    /// Use the availability counts.
    pub show_date_count: bool,
    /// Date -> number of available slots.
    pub date_availability: HashMap<String, u32>,
    /// Ignore all navigation and selection.
    pub disabled: bool,
    /// Locale name for day and month names.
    pub locale: Option<String>,
}

impl Default for WeekSliderConfig {
    fn default() -> Self {
        Self {
            selected_date: None,
            disabled_dates: Default::default(),
            available_dates: None,
            min_date: None,
            max_date: None,
            show_week_range: false,
            exclude_weekends: false,
            exclude_past_dates: true,
            highlight_today: true,
            week_starts_on: Default::default(),
            show_date_count: false,
            date_availability: Default::default(),
            disabled: false,
            locale: None,
        }
    }
}

/// A checked [WeekSliderConfig].
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub selected_date: Option<NaiveDate>,
    pub selectability: Selectability,
    pub availability: HashMap<NaiveDate, u32>,
    pub show_week_range: bool,
    pub highlight_today: bool,
    pub week_start: WeekStart,
    pub show_date_count: bool,
    pub disabled: bool,
    pub locale: Locale,
}

impl WeekSliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Externally selected date.
    pub fn selected_date(mut self, date: impl Into<String>) -> Self {
        self.selected_date = Some(date.into());
        self
    }

    pub fn disabled_dates<S: Into<String>>(mut self, dates: impl IntoIterator<Item = S>) -> Self {
        self.disabled_dates = dates.into_iter().map(|v| v.into()).collect();
        self
    }

    pub fn available_dates<S: Into<String>>(mut self, dates: impl IntoIterator<Item = S>) -> Self {
        self.available_dates = Some(dates.into_iter().map(|v| v.into()).collect());
        self
    }

    pub fn min_date(mut self, date: impl Into<String>) -> Self {
        self.min_date = Some(date.into());
        self
    }

    pub fn max_date(mut self, date: impl Into<String>) -> Self {
        self.max_date = Some(date.into());
        self
    }

    pub fn week_starts_on(mut self, week_start: WeekStart) -> Self {
        self.week_starts_on = week_start;
        self
    }

    /// Number of available slots for a date.
    pub fn availability(mut self, date: impl Into<String>, count: u32) -> Self {
        self.date_availability.insert(date.into(), count);
        self
    }

    /// Check and convert.
    ///
    /// Fails with the first malformed value.
    pub fn resolve(&self) -> Result<ResolvedConfig, WeekSliderError> {
        let selected_date = parse_opt(self.selected_date.as_deref())?;
        let disabled_dates = parse_all(&self.disabled_dates)?;
        let available_dates = match &self.available_dates {
            Some(dates) => Some(parse_all(dates)?),
            None => None,
        };
        let min_date = parse_opt(self.min_date.as_deref())?;
        let max_date = parse_opt(self.max_date.as_deref())?;

        let mut availability = HashMap::new();
        for (date, count) in &self.date_availability {
            availability.insert(parse_date(date)?, *count);
        }

        let locale = match &self.locale {
            Some(name) => parse_locale(name)?,
            None => Locale::POSIX,
        };

        Ok(ResolvedConfig {
            selected_date,
            selectability: Selectability {
                disabled_dates,
                available_dates,
                min_date,
                max_date,
                exclude_weekends: self.exclude_weekends,
                exclude_past_dates: self.exclude_past_dates,
            },
            availability,
            show_week_range: self.show_week_range,
            highlight_today: self.highlight_today,
            week_start: self.week_starts_on,
            show_date_count: self.show_date_count,
            disabled: self.disabled,
            locale,
        })
    }
}

fn parse_opt(date: Option<&str>) -> Result<Option<NaiveDate>, WeekSliderError> {
    date.map(parse_date).transpose()
}

fn parse_all(dates: &[String]) -> Result<HashSet<NaiveDate>, WeekSliderError> {
    dates.iter().map(|v| parse_date(v)).collect()
}

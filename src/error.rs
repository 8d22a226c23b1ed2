use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors when applying a configuration.
///
/// User interaction never fails, only malformed configuration
/// values are reported.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WeekSliderError {
    /// A date is not in `YYYY-MM-DD` format.
    ///
    /// Contains the offending input.
    InvalidDateFormat(String),
    /// Week start is neither `monday` nor `sunday`.
    InvalidWeekStart(String),
    /// No locale with this name.
    InvalidLocale(String),
}

impl Display for WeekSliderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WeekSliderError::InvalidDateFormat(s) => {
                write!(f, "invalid date format: {:?}, expected YYYY-MM-DD", s)
            }
            WeekSliderError::InvalidWeekStart(s) => write!(f, "invalid week start: {:?}", s),
            WeekSliderError::InvalidLocale(s) => write!(f, "unknown locale: {:?}", s),
        }
    }
}

impl Error for WeekSliderError {}

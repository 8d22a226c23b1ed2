use chrono::{Locale, NaiveDate};
use rat_weekslider::weekslider::format;
use rat_weekslider::WeekSliderError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

#[test]
fn labels() {
    let d = date(2025, 7, 5);
    let loc = Locale::POSIX;

    assert_eq!(format::iso_date(d), "2025-07-05");
    assert_eq!(format::short_weekday(d, loc), "Sat");
    assert_eq!(format::full_weekday(d, loc), "Saturday");
    assert_eq!(format::day_of_month(d), "5");
    assert_eq!(format::month_day(d, loc), "Jul 5");
    assert_eq!(format::display_date(d, loc), "Sat, Jul 5");
    assert_eq!(format::long_date(d, loc), "Saturday, July 5, 2025");
    assert_eq!(format::month_year(d, loc), "July 2025");
}

#[test]
fn week_range() {
    let loc = Locale::POSIX;
    assert_eq!(
        format::week_range_label(date(2025, 7, 21), date(2025, 7, 27), loc),
        "Jul 21 - Jul 27, 2025"
    );
    // year of the first day
    assert_eq!(
        format::week_range_label(date(2024, 12, 30), date(2025, 1, 5), loc),
        "Dec 30 - Jan 5, 2024"
    );
}

#[test]
fn localized() -> Result<(), WeekSliderError> {
    let loc = format::parse_locale("de_DE")?;
    let d = date(2025, 7, 21);
    assert_eq!(format::full_weekday(d, loc), "Montag");
    assert_eq!(format::month_year(d, loc), "Juli 2025");
    Ok(())
}

#[test]
fn unknown_locale() {
    assert_eq!(
        format::parse_locale("nowhere"),
        Err(WeekSliderError::InvalidLocale("nowhere".into()))
    );
}

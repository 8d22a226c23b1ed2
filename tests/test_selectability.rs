use chrono::{Days, NaiveDate};
use rat_weekslider::weekslider::{DisabledReason, Selectability, WeekSliderState};
use std::collections::HashMap;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

#[test]
fn disabled_list_wins_over_allow_list() {
    let today = date(2025, 7, 21);
    let rules = Selectability::new()
        .disabled_dates([date(2025, 8, 2)])
        .available_dates([date(2025, 8, 1), date(2025, 8, 2), date(2025, 8, 3)]);

    assert!(!rules.is_selectable(date(2025, 8, 2), today));
    assert_eq!(
        rules.disabled_reason(date(2025, 8, 2), today),
        Some(DisabledReason::Disabled)
    );
    assert!(rules.is_selectable(date(2025, 8, 1), today));
    assert!(rules.is_selectable(date(2025, 8, 3), today));
    assert_eq!(
        rules.disabled_reason(date(2025, 8, 4), today),
        Some(DisabledReason::NotAvailable)
    );
}

#[test]
fn bounds_are_inclusive() {
    let today = date(2025, 7, 1);
    let rules = Selectability::new()
        .min_date(date(2025, 8, 1))
        .max_date(date(2025, 8, 31));

    assert_eq!(
        rules.disabled_reason(date(2025, 7, 31), today),
        Some(DisabledReason::BeforeMin)
    );
    assert!(rules.is_selectable(date(2025, 8, 1), today));
    assert!(rules.is_selectable(date(2025, 8, 31), today));
    assert_eq!(
        rules.disabled_reason(date(2025, 9, 1), today),
        Some(DisabledReason::AfterMax)
    );
}

#[test]
fn past_dates() {
    let today = date(2025, 7, 23);
    let rules = Selectability::new();
    assert_eq!(
        rules.disabled_reason(date(2025, 7, 22), today),
        Some(DisabledReason::Past)
    );
    assert!(rules.is_selectable(today, today));

    let rules = rules.exclude_past_dates(false);
    assert!(rules.is_selectable(date(2025, 7, 22), today));
}

#[test]
fn weekends() {
    let today = date(2025, 7, 21);
    let rules = Selectability::new().exclude_weekends(true);
    assert!(rules.is_selectable(date(2025, 7, 25), today));
    assert_eq!(
        rules.disabled_reason(date(2025, 7, 26), today),
        Some(DisabledReason::Weekend)
    );
    assert_eq!(
        rules.disabled_reason(date(2025, 7, 27), today),
        Some(DisabledReason::Weekend)
    );
}

#[test]
fn precedence_is_equivalent_to_all_rules() {
    let today = date(2025, 7, 23);
    let rules = Selectability::new()
        .disabled_dates([date(2025, 7, 24), date(2025, 7, 19)])
        .available_dates([date(2025, 7, 21), date(2025, 7, 24), date(2025, 7, 25), date(2025, 7, 26)])
        .min_date(date(2025, 7, 20))
        .max_date(date(2025, 7, 30))
        .exclude_weekends(true);

    let mut d = date(2025, 7, 14);
    while d < date(2025, 8, 7) {
        let any = rules.disabled_dates.contains(&d)
            || !rules.available_dates.as_ref().expect("set").contains(&d)
            || d < date(2025, 7, 20)
            || d > date(2025, 7, 30)
            || d < today
            || rat_weekslider::weekslider::is_weekend(d);
        assert_eq!(rules.is_selectable(d, today), !any, "{}", d);
        d = d + Days::new(1);
    }
    // only the friday survives
    assert!(rules.is_selectable(date(2025, 7, 25), today));
}

#[test]
fn availability_falls_back_to_selectability() {
    let today = date(2025, 7, 21);
    let mut state = WeekSliderState::with_today(today);
    state.set_selectability(
        Selectability::new()
            .disabled_dates([date(2025, 7, 23)])
            .exclude_weekends(true),
    );
    state.set_availability(HashMap::from([(date(2025, 7, 22), 0), (date(2025, 7, 24), 4)]));
    state.set_show_date_count(false);

    let mut d = date(2025, 7, 14);
    while d < date(2025, 8, 4) {
        assert_eq!(state.has_availability(d), state.is_date_selectable(d), "{}", d);
        d = d + Days::new(1);
    }
}

#[test]
fn availability_with_counts() {
    let today = date(2025, 7, 21);
    let mut state = WeekSliderState::with_today(today);
    state.set_selectability(Selectability::new().disabled_dates([date(2025, 7, 24)]));
    state.set_availability(HashMap::from([(date(2025, 7, 22), 0), (date(2025, 7, 24), 4)]));
    state.set_show_date_count(true);

    // count wins if recorded
    assert!(!state.has_availability(date(2025, 7, 22)));
    assert!(state.is_date_selectable(date(2025, 7, 22)));
    assert!(state.has_availability(date(2025, 7, 24)));
    assert!(state.is_date_disabled(date(2025, 7, 24)));
    // no count, selectability decides
    assert!(state.has_availability(date(2025, 7, 25)));
    assert!(!state.has_availability(date(2025, 7, 18)));

    assert_eq!(state.availability_count(date(2025, 7, 24)), Some(4));
    assert_eq!(state.availability_count(date(2025, 7, 25)), None);
}

use crate::_private::NonExhaustive;
use crate::weekslider::event::WeekOutcome;
use crate::weekslider::format;
use crate::weekslider::{
    is_weekend, DisabledReason, Direction, ResolvedConfig, Selectability, Week, WeekSelection,
    WeekSliderConfig, WeekStart,
};
use crate::WeekSliderError;
use chrono::{Local, Locale, NaiveDate};
use crossterm::event::KeyCode;
use log::{debug, warn};
use rat_event::util::item_at;
use rat_event::{ct_event, flow, HandleEvent, MouseOnly, Regular};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use rat_reloc::{relocate_area, relocate_areas, RelocatableState};
use ratatui::layout::{Position, Rect};
use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

/// One day of the [ViewState].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayView {
    pub date: NaiveDate,
    /// `Fri`
    pub short_name: String,
    /// `25`
    pub day_number: String,
    /// `Friday, July 25, 2025 - 3 slots available`
    pub title: String,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
    pub is_weekend: bool,
    pub has_availability: bool,
    pub availability_count: Option<u32>,
}

/// Everything needed to display the current week.
///
/// This is a snapshot, get a new one after each change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub week: Week,
    /// `Jul 21 - Jul 27, 2025`
    pub week_range_label: String,
    /// `July 2025`
    pub month_year_label: String,
    pub show_week_range: bool,
    pub show_date_count: bool,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    pub disabled: bool,
    pub days: [DayView; 7],
}

type DateSelectFn = Box<dyn FnMut(&WeekSelection)>;
type WeekChangeFn = Box<dyn FnMut(&str, &str)>;

/// State & event-handling.
///
/// Holds the displayed week and the rules for selecting a date.
/// Configuration is applied with [reconcile](WeekSliderState::reconcile),
/// the first call anchors the week and notifies the host.
///
/// Today is fixed when the state is created. Use
/// [set_today](WeekSliderState::set_today) to move it on.
pub struct WeekSliderState {
    /// Complete area
    /// __read only__. renewed for each render.
    pub area: Rect,
    /// Area inside the block.
    /// __read only__. renewed for each render.
    pub inner: Rect,
    /// Previous week arrow.
    /// __read only__. renewed for each render.
    pub area_prev: Rect,
    /// Week range label.
    /// __read only__. renewed for each render.
    pub area_label: Rect,
    /// Days of the week.
    /// __read only__. renewed for each render.
    pub area_days: [Rect; 7],
    /// Next week arrow.
    /// __read only__. renewed for each render.
    pub area_next: Rect,

    /// Displayed week.
    week: Week,
    today: NaiveDate,
    /// Highlighted date.
    selected: Option<NaiveDate>,
    /// Last selected_date from the configuration.
    external_selected: Option<NaiveDate>,
    mounted: bool,

    selectability: Selectability,
    availability: HashMap<NaiveDate, u32>,
    week_start: WeekStart,
    highlight_today: bool,
    show_date_count: bool,
    show_week_range: bool,
    disabled: bool,
    loc: Locale,

    on_date_select: Option<DateSelectFn>,
    on_week_change: Option<WeekChangeFn>,

    /// Focus
    /// __read+write__
    pub focus: FocusFlag,

    pub non_exhaustive: NonExhaustive,
}

impl Debug for WeekSliderState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeekSliderState")
            .field("area", &self.area)
            .field("inner", &self.inner)
            .field("area_prev", &self.area_prev)
            .field("area_label", &self.area_label)
            .field("area_days", &self.area_days)
            .field("area_next", &self.area_next)
            .field("week", &self.week)
            .field("today", &self.today)
            .field("selected", &self.selected)
            .field("external_selected", &self.external_selected)
            .field("mounted", &self.mounted)
            .field("selectability", &self.selectability)
            .field("availability", &self.availability)
            .field("week_start", &self.week_start)
            .field("highlight_today", &self.highlight_today)
            .field("show_date_count", &self.show_date_count)
            .field("show_week_range", &self.show_week_range)
            .field("disabled", &self.disabled)
            .field("loc", &self.loc)
            .field("on_date_select", &self.on_date_select.as_ref().map(|_| "dyn FnMut()"))
            .field("on_week_change", &self.on_week_change.as_ref().map(|_| "dyn FnMut()"))
            .field("focus", &self.focus)
            .finish()
    }
}

impl Default for WeekSliderState {
    fn default() -> Self {
        Self::with_today(Local::now().date_naive())
    }
}

impl HasFocus for WeekSliderState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    #[inline]
    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    #[inline]
    fn area(&self) -> Rect {
        self.area
    }
}

impl RelocatableState for WeekSliderState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        self.inner = relocate_area(self.inner, shift, clip);
        self.area_prev = relocate_area(self.area_prev, shift, clip);
        self.area_label = relocate_area(self.area_label, shift, clip);
        relocate_areas(&mut self.area_days, shift, clip);
        self.area_next = relocate_area(self.area_next, shift, clip);
    }
}

impl WeekSliderState {
    /// New state, today is taken from the local clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// New state with a given today.
    /// Shows the week of today.
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            area: Default::default(),
            inner: Default::default(),
            area_prev: Default::default(),
            area_label: Default::default(),
            area_days: Default::default(),
            area_next: Default::default(),
            week: Week::of(today, WeekStart::default()),
            today,
            selected: None,
            external_selected: None,
            mounted: false,
            selectability: Default::default(),
            availability: Default::default(),
            week_start: Default::default(),
            highlight_today: true,
            show_date_count: false,
            show_week_range: false,
            disabled: false,
            loc: Locale::POSIX,
            on_date_select: None,
            on_week_change: None,
            focus: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }

    /// New state with the given configuration applied.
    ///
    /// The week-change notification for the initial week has already
    /// happened at this point. Use [new](Self::new) and
    /// [reconcile](Self::reconcile) if you need it.
    pub fn from_config(config: &WeekSliderConfig) -> Result<Self, WeekSliderError> {
        let mut state = Self::new();
        state.reconcile(config)?;
        Ok(state)
    }

    /// Called with every successful selection.
    pub fn set_on_date_select(&mut self, f: impl FnMut(&WeekSelection) + 'static) {
        self.on_date_select = Some(Box::new(f));
    }

    /// Called with the first and last day of the new week as
    /// `YYYY-MM-DD`. Fires after each navigation and once for the
    /// initial week.
    pub fn set_on_week_change(&mut self, f: impl FnMut(&str, &str) + 'static) {
        self.on_week_change = Some(Box::new(f));
    }

    /// Apply a new configuration.
    ///
    /// The first call anchors the displayed week on the selected date,
    /// or on today. Afterwards the week only moves if the selected date
    /// differs from the one last reconciled.
    ///
    /// A malformed configuration is rejected as a whole and leaves
    /// the state unchanged.
    pub fn reconcile(&mut self, config: &WeekSliderConfig) -> Result<WeekOutcome, WeekSliderError> {
        let resolved = match config.resolve() {
            Ok(v) => v,
            Err(e) => {
                warn!("week slider: configuration rejected: {}", e);
                return Err(e);
            }
        };
        Ok(self.apply(resolved))
    }

    /// Apply an already checked configuration.
    /// Same as [reconcile](Self::reconcile) otherwise.
    pub fn apply(&mut self, config: ResolvedConfig) -> WeekOutcome {
        let old_week = self.week;

        self.selectability = config.selectability;
        self.availability = config.availability;
        self.highlight_today = config.highlight_today;
        self.show_date_count = config.show_date_count;
        self.show_week_range = config.show_week_range;
        self.disabled = config.disabled;
        self.loc = config.locale;
        if self.week_start != config.week_start {
            self.week_start = config.week_start;
            self.week = Week::of(self.week.start(), self.week_start);
        }

        if !self.mounted {
            self.mounted = true;
            self.external_selected = config.selected_date;
            if let Some(date) = config.selected_date {
                self.selected = Some(date);
                self.week = Week::of(date, self.week_start);
            } else {
                if self.highlight_today {
                    self.selected = Some(self.today);
                }
                self.week = Week::of(self.today, self.week_start);
            }
            debug!(
                "week slider: initial week {} - {}",
                self.week.start(),
                self.week.end()
            );
            self.notify_week_change();
            return WeekOutcome::WeekChanged;
        }

        if config.selected_date != self.external_selected {
            self.external_selected = config.selected_date;
            if let Some(date) = config.selected_date {
                debug!("week slider: re-anchor on {}", date);
                self.selected = Some(date);
                self.week = Week::of(date, self.week_start);
            }
        }

        if self.week != old_week {
            WeekOutcome::WeekChanged
        } else {
            WeekOutcome::Changed
        }
    }

    /// Today.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Change today. Doesn't move the displayed week.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// First day of the week.
    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// First day of the week.
    /// The current week is moved to start on the new weekday.
    pub fn set_week_start(&mut self, week_start: WeekStart) {
        self.week_start = week_start;
        self.week = Week::of(self.week.start(), week_start);
    }

    /// Selection rules.
    pub fn selectability(&self) -> &Selectability {
        &self.selectability
    }

    /// Selection rules.
    pub fn set_selectability(&mut self, selectability: Selectability) {
        self.selectability = selectability;
    }

    /// Available slots per date.
    pub fn set_availability(&mut self, availability: HashMap<NaiveDate, u32>) {
        self.availability = availability;
    }

    /// Use the availability counts.
    pub fn set_show_date_count(&mut self, show: bool) {
        self.show_date_count = show;
    }

    pub fn show_date_count(&self) -> bool {
        self.show_date_count
    }

    pub fn set_show_week_range(&mut self, show: bool) {
        self.show_week_range = show;
    }

    pub fn show_week_range(&self) -> bool {
        self.show_week_range
    }

    /// Highlight today on the first reconcile.
    pub fn set_highlight_today(&mut self, highlight: bool) {
        self.highlight_today = highlight;
    }

    pub fn highlight_today(&self) -> bool {
        self.highlight_today
    }

    /// A disabled slider ignores navigation and selection.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Locale for day and month names.
    pub fn set_locale(&mut self, loc: Locale) {
        self.loc = loc;
    }

    pub fn locale(&self) -> Locale {
        self.loc
    }

    /// Displayed week.
    pub fn current_week(&self) -> Week {
        self.week
    }

    /// First day of the displayed week.
    pub fn start_date(&self) -> NaiveDate {
        self.week.start()
    }

    /// Last day of the displayed week.
    pub fn end_date(&self) -> NaiveDate {
        self.week.end()
    }

    /// Highlighted date.
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// `Jul 21 - Jul 27, 2025`
    pub fn week_range_label(&self) -> String {
        format::week_range_label(self.week.start(), self.week.end(), self.loc)
    }

    /// `July 2025`, month of the first day.
    pub fn month_year_label(&self) -> String {
        format::month_year(self.week.start(), self.loc)
    }

    /// Would navigation stay within min/max.
    ///
    /// The bound itself is a valid start for the new week.
    /// Always false at either end of the calendar.
    pub fn can_navigate(&self, direction: Direction) -> bool {
        self.target_week(direction).is_some()
    }

    /// The week navigation would show, if allowed.
    fn target_week(&self, direction: Direction) -> Option<Week> {
        match direction {
            Direction::Previous => {
                let week = self.week.prev()?;
                match self.selectability.min_date {
                    Some(min) if week.start() < min => None,
                    _ => Some(week),
                }
            }
            Direction::Next => {
                let week = self.week.next()?;
                match self.selectability.max_date {
                    Some(max) if week.start() > max => None,
                    _ => Some(week),
                }
            }
        }
    }

    pub fn can_go_previous(&self) -> bool {
        self.can_navigate(Direction::Previous)
    }

    pub fn can_go_next(&self) -> bool {
        self.can_navigate(Direction::Next)
    }

    /// Move one week back or forth.
    ///
    /// Does nothing if the slider is disabled. Returns Unchanged
    /// if the min/max date prevents the move.
    pub fn navigate(&mut self, direction: Direction) -> WeekOutcome {
        if self.disabled {
            return WeekOutcome::Continue;
        }
        let Some(week) = self.target_week(direction) else {
            return WeekOutcome::Unchanged;
        };

        self.week = week;
        self.notify_week_change();
        WeekOutcome::WeekChanged
    }

    /// Show the previous week.
    pub fn prev_week(&mut self) -> WeekOutcome {
        self.navigate(Direction::Previous)
    }

    /// Show the next week.
    pub fn next_week(&mut self) -> WeekOutcome {
        self.navigate(Direction::Next)
    }

    /// Show the week of today.
    ///
    /// Ignores min/max, today is always reachable.
    pub fn show_today(&mut self) -> WeekOutcome {
        if self.disabled {
            return WeekOutcome::Continue;
        }
        let week = Week::of(self.today, self.week_start);
        if week == self.week {
            return WeekOutcome::Unchanged;
        }
        self.week = week;
        self.notify_week_change();
        WeekOutcome::WeekChanged
    }

    /// Can the date be selected.
    pub fn is_date_selectable(&self, date: NaiveDate) -> bool {
        self.selectability.is_selectable(date, self.today)
    }

    /// Negation of [is_date_selectable](Self::is_date_selectable).
    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        !self.is_date_selectable(date)
    }

    /// Why a date can't be selected.
    pub fn disabled_reason(&self, date: NaiveDate) -> Option<DisabledReason> {
        self.selectability.disabled_reason(date, self.today)
    }

    /// Recorded number of available slots.
    pub fn availability_count(&self, date: NaiveDate) -> Option<u32> {
        self.availability.get(&date).copied()
    }

    /// Are there slots left for the date.
    ///
    /// Uses the recorded count if show_date_count is set, falls back
    /// to selectability otherwise.
    pub fn has_availability(&self, date: NaiveDate) -> bool {
        if self.show_date_count {
            if let Some(count) = self.availability_count(date) {
                return count > 0;
            }
        }
        self.is_date_selectable(date)
    }

    /// Select a date.
    ///
    /// Returns None and notifies nobody if the slider is disabled or
    /// the date is not selectable. Doesn't change the displayed week,
    /// even if the date is outside of it.
    pub fn select_date(&mut self, date: NaiveDate) -> Option<WeekSelection> {
        if self.disabled || !self.is_date_selectable(date) {
            return None;
        }

        self.selected = Some(date);
        let selection = WeekSelection::new(date, self.week, self.today, self.loc);
        if let Some(on_date_select) = self.on_date_select.as_mut() {
            on_date_select(&selection);
        }
        Some(selection)
    }

    /// Select the nth day of the displayed week.
    pub fn select_day(&mut self, n: usize) -> WeekOutcome {
        match self.week.day(n) {
            Some(date) if self.select_date(date).is_some() => WeekOutcome::Selected,
            _ => WeekOutcome::Continue,
        }
    }

    /// Keyboard navigation independent of focus.
    ///
    /// Left shows the previous week, Right the next one.
    pub fn handle_key(&mut self, key: KeyCode) -> WeekOutcome {
        if self.disabled {
            return WeekOutcome::Continue;
        }
        match key {
            KeyCode::Left => self.prev_week(),
            KeyCode::Right => self.next_week(),
            _ => WeekOutcome::Continue,
        }
    }

    /// View data for one date.
    pub fn day_view(&self, date: NaiveDate) -> DayView {
        let availability_count = self.availability_count(date);
        let mut title = format::long_date(date, self.loc);
        if let Some(count) = availability_count {
            title.push_str(&format!(" - {} slots available", count));
        }

        DayView {
            date,
            short_name: format::short_weekday(date, self.loc),
            day_number: format::day_of_month(date),
            title,
            is_today: date == self.today,
            is_selected: self.selected == Some(date),
            is_disabled: self.is_date_disabled(date),
            is_weekend: is_weekend(date),
            has_availability: self.has_availability(date),
            availability_count,
        }
    }

    /// Snapshot of everything displayed.
    pub fn view(&self) -> ViewState {
        ViewState {
            week: self.week,
            week_range_label: self.week_range_label(),
            month_year_label: self.month_year_label(),
            show_week_range: self.show_week_range,
            show_date_count: self.show_date_count,
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
            disabled: self.disabled,
            days: self.week.days().map(|date| self.day_view(date)),
        }
    }

    fn notify_week_change(&mut self) {
        let start = format::iso_date(self.week.start());
        let end = format::iso_date(self.week.end());
        if let Some(on_week_change) = self.on_week_change.as_mut() {
            on_week_change(&start, &end);
        }
    }
}

impl HandleEvent<crossterm::event::Event, Regular, WeekOutcome> for WeekSliderState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: Regular) -> WeekOutcome {
        if self.is_focused() {
            flow!(match event {
                ct_event!(keycode press Left) => self.prev_week(),
                ct_event!(keycode press Right) => self.next_week(),
                ct_event!(keycode press Home) => self.show_today(),
                _ => WeekOutcome::Continue,
            });
        }

        self.handle(event, MouseOnly)
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, WeekOutcome> for WeekSliderState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: MouseOnly) -> WeekOutcome {
        match event {
            ct_event!(mouse down Left for x, y)
                if self.area_prev.contains(Position::new(*x, *y)) =>
            {
                self.prev_week()
            }
            ct_event!(mouse down Left for x, y)
                if self.area_next.contains(Position::new(*x, *y)) =>
            {
                self.next_week()
            }
            ct_event!(mouse down Left for x, y) => {
                if let Some(n) = item_at(&self.area_days, *x, *y) {
                    self.select_day(n)
                } else {
                    WeekOutcome::Continue
                }
            }
            ct_event!(scroll up for x, y) if self.area.contains(Position::new(*x, *y)) => {
                self.prev_week()
            }
            ct_event!(scroll down for x, y) if self.area.contains(Position::new(*x, *y)) => {
                self.next_week()
            }
            _ => WeekOutcome::Continue,
        }
    }
}

/// Handle all events.
/// Key events are only processed if focus is true.
/// Mouse events are processed if they are in range.
pub fn handle_events(
    state: &mut WeekSliderState,
    focus: bool,
    event: &crossterm::event::Event,
) -> WeekOutcome {
    state.focus.set(focus);
    HandleEvent::handle(state, event, Regular)
}

/// Handle only mouse-events.
pub fn handle_mouse_events(
    state: &mut WeekSliderState,
    event: &crossterm::event::Event,
) -> WeekOutcome {
    HandleEvent::handle(state, event, MouseOnly)
}

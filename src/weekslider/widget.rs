use crate::util::{fallback_disabled_style, revert_style};
use crate::weekslider::{DayView, WeekSliderState, WeekSliderStyle};
use rat_focus::HasFocus;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::BlockExt;
use ratatui::style::Style;
use ratatui::text::Span;
#[cfg(feature = "unstable-widget-ref")]
use ratatui::widgets::StatefulWidgetRef;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use unicode_width::UnicodeWidthStr;

/// Renders the week as a single line.
///
/// `< Jul 21 - Jul 27, 2025 Mon 21 Tue 22 ... Sun 27 >`
///
/// The range label is only shown if the state says so.
#[derive(Debug, Clone)]
pub struct WeekSlider<'a> {
    style: Style,
    label_style: Option<Style>,
    arrow_style: Option<Style>,
    day_style: Option<Style>,
    weekend_style: Option<Style>,
    today_style: Option<Style>,
    disabled_style: Option<Style>,
    select_style: Option<Style>,
    focus_style: Option<Style>,

    prev_symbol: &'a str,
    next_symbol: &'a str,

    block: Option<Block<'a>>,
}

impl Default for WeekSlider<'_> {
    fn default() -> Self {
        Self {
            style: Default::default(),
            label_style: None,
            arrow_style: None,
            day_style: None,
            weekend_style: None,
            today_style: None,
            disabled_style: None,
            select_style: None,
            focus_style: None,
            prev_symbol: "<",
            next_symbol: ">",
            block: None,
        }
    }
}

impl<'a> WeekSlider<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the composite style.
    #[inline]
    pub fn styles(mut self, s: WeekSliderStyle) -> Self {
        self.style = s.style;
        if s.label.is_some() {
            self.label_style = s.label;
        }
        if s.arrow.is_some() {
            self.arrow_style = s.arrow;
        }
        if s.day.is_some() {
            self.day_style = s.day;
        }
        if s.weekend.is_some() {
            self.weekend_style = s.weekend;
        }
        if s.today.is_some() {
            self.today_style = s.today;
        }
        if s.disabled.is_some() {
            self.disabled_style = s.disabled;
        }
        if s.select.is_some() {
            self.select_style = s.select;
        }
        if s.focus.is_some() {
            self.focus_style = s.focus;
        }
        if s.block.is_some() {
            self.block = s.block;
        }
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Base style.
    #[inline]
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.style = style.into();
        self.block = self.block.map(|v| v.style(self.style));
        self
    }

    /// Week range label.
    #[inline]
    pub fn label_style(mut self, style: impl Into<Style>) -> Self {
        self.label_style = Some(style.into());
        self
    }

    /// Prev/next arrows.
    #[inline]
    pub fn arrow_style(mut self, style: impl Into<Style>) -> Self {
        self.arrow_style = Some(style.into());
        self
    }

    #[inline]
    pub fn day_style(mut self, style: impl Into<Style>) -> Self {
        self.day_style = Some(style.into());
        self
    }

    #[inline]
    pub fn weekend_style(mut self, style: impl Into<Style>) -> Self {
        self.weekend_style = Some(style.into());
        self
    }

    #[inline]
    pub fn today_style(mut self, style: impl Into<Style>) -> Self {
        self.today_style = Some(style.into());
        self
    }

    /// Days that can't be selected.
    #[inline]
    pub fn disabled_style(mut self, style: impl Into<Style>) -> Self {
        self.disabled_style = Some(style.into());
        self
    }

    /// Selected day.
    #[inline]
    pub fn select_style(mut self, style: impl Into<Style>) -> Self {
        self.select_style = Some(style.into());
        self
    }

    /// Selected day when focused.
    #[inline]
    pub fn focus_style(mut self, style: impl Into<Style>) -> Self {
        self.focus_style = Some(style.into());
        self
    }

    /// Symbols for the navigation arrows.
    #[inline]
    pub fn symbols(mut self, prev: &'a str, next: &'a str) -> Self {
        self.prev_symbol = prev;
        self.next_symbol = next;
        self
    }

    /// Block
    #[inline]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block.style(self.style));
        self
    }
}

#[cfg(feature = "unstable-widget-ref")]
impl StatefulWidgetRef for WeekSlider<'_> {
    type State = WeekSliderState;

    fn render_ref(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl StatefulWidget for WeekSlider<'_> {
    type State = WeekSliderState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(widget: &WeekSlider<'_>, area: Rect, buf: &mut Buffer, state: &mut WeekSliderState) {
    state.area = area;
    state.inner = widget.block.inner_if_some(area);

    if let Some(block) = widget.block.clone() {
        block.render(area, buf);
    } else {
        buf.set_style(area, widget.style);
    }

    let view = state.view();
    let focused = state.is_focused();
    let inner = state.inner;

    let arrow_style = widget.arrow_style.unwrap_or(widget.style);
    let label_style = widget.label_style.unwrap_or(widget.style);

    let mut x = inner.x;
    let y = inner.y;

    let prev_style = if view.can_go_previous && !view.disabled {
        arrow_style
    } else {
        disabled_style(widget, arrow_style)
    };
    state.area_prev = cell(&mut x, y, widget.prev_symbol, inner);
    Span::from(widget.prev_symbol)
        .style(prev_style)
        .render(state.area_prev, buf);

    if view.show_week_range {
        state.area_label = cell(&mut x, y, &view.week_range_label, inner);
        Span::from(view.week_range_label.as_str())
            .style(label_style)
            .render(state.area_label, buf);
    } else {
        state.area_label = Rect::default();
    }

    for (i, day) in view.days.iter().enumerate() {
        let text = if view.show_date_count {
            if let Some(count) = day.availability_count {
                format!("{} {} ({})", day.short_name, day.day_number, count)
            } else {
                format!("{} {}", day.short_name, day.day_number)
            }
        } else {
            format!("{} {}", day.short_name, day.day_number)
        };

        state.area_days[i] = cell(&mut x, y, &text, inner);
        Span::from(text)
            .style(calc_day_style(widget, day, focused))
            .render(state.area_days[i], buf);
    }

    let next_style = if view.can_go_next && !view.disabled {
        arrow_style
    } else {
        disabled_style(widget, arrow_style)
    };
    state.area_next = cell(&mut x, y, widget.next_symbol, inner);
    Span::from(widget.next_symbol)
        .style(next_style)
        .render(state.area_next, buf);
}

/// Area for the text at x, clipped to the inner area.
/// Advances x past the text and one blank.
fn cell(x: &mut u16, y: u16, text: &str, inner: Rect) -> Rect {
    let width = text.width() as u16;
    let area = Rect::new(*x, y, width, 1).intersection(inner);
    *x = x.saturating_add(width).saturating_add(1);
    area
}

fn disabled_style(widget: &WeekSlider<'_>, style: Style) -> Style {
    if let Some(disabled_style) = widget.disabled_style {
        style.patch(disabled_style)
    } else {
        fallback_disabled_style(style)
    }
}

fn calc_day_style(widget: &WeekSlider<'_>, day: &DayView, focused: bool) -> Style {
    let mut style = widget.day_style.unwrap_or(widget.style);
    if day.is_weekend {
        if let Some(weekend_style) = widget.weekend_style {
            style = style.patch(weekend_style);
        }
    }
    if day.is_today {
        if let Some(today_style) = widget.today_style {
            style = style.patch(today_style);
        }
    }
    if day.is_disabled {
        style = disabled_style(widget, style);
    }
    if day.is_selected {
        let select_style = if focused {
            widget
                .focus_style
                .or(widget.select_style)
                .unwrap_or(revert_style(widget.style))
        } else {
            widget.select_style.unwrap_or(revert_style(widget.style))
        };
        style = style.patch(select_style);
    }
    style
}

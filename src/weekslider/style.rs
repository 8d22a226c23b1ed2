use crate::_private::NonExhaustive;
use ratatui::style::Style;
use ratatui::widgets::Block;

/// Composite style for the week slider.
#[derive(Debug, Clone)]
pub struct WeekSliderStyle {
    pub style: Style,
    /// Week range label.
    pub label: Option<Style>,
    /// Prev/next arrows.
    pub arrow: Option<Style>,
    pub day: Option<Style>,
    pub weekend: Option<Style>,
    pub today: Option<Style>,
    pub disabled: Option<Style>,
    pub select: Option<Style>,
    pub focus: Option<Style>,
    pub block: Option<Block<'static>>,
    pub non_exhaustive: NonExhaustive,
}

impl Default for WeekSliderStyle {
    fn default() -> Self {
        Self {
            style: Default::default(),
            label: None,
            arrow: None,
            day: None,
            weekend: None,
            today: None,
            disabled: None,
            select: None,
            focus: None,
            block: None,
            non_exhaustive: NonExhaustive,
        }
    }
}

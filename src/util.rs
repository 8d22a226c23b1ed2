use ratatui::style::{Style, Stylize};
use std::mem;

/// Swap fg/bg, or use black on white if neither is set.
pub(crate) fn revert_style(mut style: Style) -> Style {
    if style.fg.is_some() || style.bg.is_some() {
        mem::swap(&mut style.fg, &mut style.bg);
        style
    } else {
        style.black().on_white()
    }
}

/// Dimmed fallback for days that can't be selected.
pub(crate) fn fallback_disabled_style(style: Style) -> Style {
    style.dim()
}

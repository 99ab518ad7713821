//! Shared scrollbar rendering utilities.

use ratatui::prelude::StatefulWidget;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Render a vertical scrollbar on the right edge if needed.
pub fn render_vertical_scrollbar(
    area: Rect,
    buf: &mut Buffer,
    total: usize,
    visible: usize,
    offset: usize,
) {
    if total <= visible {
        return;
    }

    let max_scroll = total.saturating_sub(visible);

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("▲"))
        .end_symbol(Some("▼"))
        .track_symbol(Some("│"))
        .thumb_symbol("█");

    let mut scrollbar_state = ScrollbarState::new(max_scroll).position(offset);
    scrollbar.render(area, buf, &mut scrollbar_state);
}

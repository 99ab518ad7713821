//! Footer key hint rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{FOOTER_BG, KEY_HINT_BG, TEXT_FG, TEXT_MUTED};

/// Render `[key] action` pairs on the left and `status` on the right.
pub fn render_key_hints(area: Rect, buf: &mut Buffer, hints: &[(&str, &str)], status: &str) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!(" {key} "),
            Style::default().fg(TEXT_FG).bg(KEY_HINT_BG),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(TEXT_MUTED),
        ));
    }

    let background = Style::default().bg(FOOTER_BG);
    Paragraph::new(Line::from(spans))
        .style(background)
        .render(area, buf);

    if !status.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            format!("{status} "),
            Style::default().fg(TEXT_MUTED),
        )))
        .alignment(Alignment::Right)
        .render(area, buf);
    }
}

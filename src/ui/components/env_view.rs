//! Read-only, non-wrapping, scrollable view of an environment snapshot.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use super::scrollbar::render_vertical_scrollbar;
use super::theme::{BORDER_FG, LABEL_FG, TEXT_FG};
use crate::env::EnvironmentSnapshot;

/// Label plus text area listing `name=value` lines.
///
/// The text is fixed at construction; only the scroll offsets change.
#[derive(Debug, Clone)]
pub struct EnvView {
    label: String,
    lines: Vec<String>,
    variable_count: usize,
    max_width: usize,
    scroll_y: usize,
    scroll_x: usize,
    /// Text area size from the last render, used to clamp scrolling
    viewport: (usize, usize),
}

impl EnvView {
    pub fn new(label: impl Into<String>, snapshot: &EnvironmentSnapshot) -> Self {
        let lines = snapshot.lines();
        let max_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        Self {
            label: label.into(),
            lines,
            variable_count: snapshot.len(),
            max_width,
            scroll_y: 0,
            scroll_x: 0,
            viewport: (0, 0),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Display lines; larger than the variable count when values contain newlines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn scroll_offset(&self) -> (usize, usize) {
        (self.scroll_y, self.scroll_x)
    }

    fn max_scroll_y(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport.0)
    }

    fn max_scroll_x(&self) -> usize {
        self.max_width.saturating_sub(self.viewport.1)
    }

    pub fn page_size(&self) -> usize {
        self.viewport.0.max(1)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.scroll_y = self.scroll_y.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll_y = (self.scroll_y + n).min(self.max_scroll_y());
    }

    pub fn scroll_left(&mut self, n: usize) {
        self.scroll_x = self.scroll_x.saturating_sub(n);
    }

    pub fn scroll_right(&mut self, n: usize) {
        self.scroll_x = (self.scroll_x + n).min(self.max_scroll_x());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_y = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_y = self.max_scroll_y();
    }

    /// Split `area` into the label row and the bordered text block.
    fn layout(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);
        (chunks[0], chunks[1])
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer) {
        let (label_area, text_area) = Self::layout(area);

        Paragraph::new(Line::from(self.label.as_str()))
            .style(Style::default().fg(LABEL_FG).add_modifier(Modifier::BOLD))
            .render(label_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER_FG));
        let inner = block.inner(text_area);
        block.render(text_area, buf);

        self.viewport = (inner.height as usize, inner.width as usize);
        // Terminal resizes can leave offsets past the new maximum
        self.scroll_y = self.scroll_y.min(self.max_scroll_y());
        self.scroll_x = self.scroll_x.min(self.max_scroll_x());

        let visible: Vec<Line> = self
            .lines
            .iter()
            .skip(self.scroll_y)
            .take(inner.height as usize)
            .map(|l| Line::from(l.as_str()))
            .collect();

        // No .wrap(): long values run off the right edge and scroll horizontally
        let scroll_x = u16::try_from(self.scroll_x).unwrap_or(u16::MAX);
        Paragraph::new(visible)
            .style(Style::default().fg(TEXT_FG))
            .scroll((0, scroll_x))
            .render(inner, buf);

        render_vertical_scrollbar(
            text_area,
            buf,
            self.lines.len(),
            inner.height as usize,
            self.scroll_y,
        );
    }
}

use std::io;

use crossterm::{
    event::{EnableMouseCapture, Event, EventStream, MouseEventKind},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};

use crate::config::ViewerConfig;
use crate::env::EnvironmentSnapshot;
use crate::ui::action::Action;
use crate::ui::components::{render_key_hints, EnvView};
use crate::ui::terminal_guard::TerminalGuard;

const MOUSE_SCROLL_LINES: usize = 3;

const KEY_HINTS: &[(&str, &str)] = &[
    ("↑↓", "Scroll"),
    ("←→", "Pan"),
    ("PgUp/PgDn", "Page"),
    ("q", "Close"),
];

/// Environment viewer window state
pub struct App {
    /// Viewer configuration
    config: ViewerConfig,
    /// The label and read-only text area
    view: EnvView,
    /// Whether the window should close
    should_quit: bool,
}

impl App {
    /// Build the window around an already captured snapshot.
    pub fn new(config: ViewerConfig, snapshot: &EnvironmentSnapshot) -> Self {
        let view = EnvView::new(config.label.clone(), snapshot);
        Self {
            config,
            view,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view(&self) -> &EnvView {
        &self.view
    }

    /// Run until the user closes the window.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        tracing::info!(variables = self.view.variable_count(), "Environment viewer started");
        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;
        tracing::info!("Environment viewer closed");

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();

        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            match events.next().await {
                Some(Ok(event)) => self.handle_event(event),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            }
        }

        Ok(())
    }

    /// Apply one terminal event. Resize needs no handling: the next draw
    /// re-clamps against the new size.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(action) = Action::from_key(key) {
                    self.apply(action);
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollUp => self.view.scroll_up(MOUSE_SCROLL_LINES),
                MouseEventKind::ScrollDown => self.view.scroll_down(MOUSE_SCROLL_LINES),
                MouseEventKind::ScrollLeft => self.view.scroll_left(MOUSE_SCROLL_LINES),
                MouseEventKind::ScrollRight => self.view.scroll_right(MOUSE_SCROLL_LINES),
                _ => {}
            },
            _ => {}
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollUp(n) => self.view.scroll_up(n as usize),
            Action::ScrollDown(n) => self.view.scroll_down(n as usize),
            Action::ScrollLeft(n) => self.view.scroll_left(n as usize),
            Action::ScrollRight(n) => self.view.scroll_right(n as usize),
            Action::ScrollPageUp => {
                let page = self.view.page_size();
                self.view.scroll_up(page);
            }
            Action::ScrollPageDown => {
                let page = self.view.page_size();
                self.view.scroll_down(page);
            }
            Action::ScrollToTop => self.view.scroll_to_top(),
            Action::ScrollToBottom => self.view.scroll_to_bottom(),
        }
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let window = window_area(f.area(), self.config.width, self.config.height);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(window);

        let buf = f.buffer_mut();
        self.view.render(chunks[0], buf);

        let status = format!("{} variables", self.view.variable_count());
        render_key_hints(chunks[1], buf, KEY_HINTS, &status);
    }
}

/// Centre a `width`×`height` window inside `area`, shrinking it to fit.
pub fn window_area(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

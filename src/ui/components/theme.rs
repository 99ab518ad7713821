//! Shared UI color constants.

use ratatui::style::Color;

pub const LABEL_FG: Color = Color::Rgb(200, 200, 200);
pub const BORDER_FG: Color = Color::Rgb(70, 70, 70);
pub const TEXT_FG: Color = Color::Rgb(220, 220, 220);

pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);
pub const TEXT_MUTED: Color = Color::Rgb(140, 140, 140);

pub mod action;
pub mod app;
pub mod components;
pub mod terminal_guard;

pub use action::Action;
pub use app::{window_area, App};
pub use terminal_guard::{install_panic_hook, TerminalGuard};

mod env_view;
mod key_hints;
mod scrollbar;
pub mod theme;

pub use env_view::EnvView;
pub use key_hints::render_key_hints;
pub use scrollbar::render_vertical_scrollbar;

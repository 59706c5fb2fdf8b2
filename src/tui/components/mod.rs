//! TUI components

mod button;
mod help;
mod text_input;

pub use button::{render_buttons, Button};
pub use help::HelpOverlay;
pub use text_input::render_entry;

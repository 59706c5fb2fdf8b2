//! CLI parsing and command implementations

pub mod definition;

pub use definition::{Cli, Commands};

use crate::config::Config;
use crate::tui::themes::AVAILABLE_THEMES;

impl Cli {
    /// Layer command-line flags over values loaded from the config file.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(theme) = &self.theme {
            config.theme.name = theme.clone();
        }
        if let Some(mode) = self.view {
            config.display.mode = mode;
        }
        if let Some(tracking) = self.track_by {
            config.tasks.completion_tracking = tracking;
        }
    }
}

pub fn list_themes(current: &str) {
    for name in AVAILABLE_THEMES {
        let marker = if *name == current { "*" } else { " " };
        println!("{} {}", marker, name);
    }
}

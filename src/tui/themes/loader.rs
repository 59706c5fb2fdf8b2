use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::Deserialize;
use std::str::FromStr;
use tracing::warn;

use crate::tui::styles::Theme;

pub const AVAILABLE_THEMES: &[&str] = &["darkly", "flatly"];

const DARKLY_TOML: &str = include_str!("darkly.toml");
const FLATLY_TOML: &str = include_str!("flatly.toml");

/// On-disk theme layout: every color is a `#RRGGBB` string.
#[derive(Debug, Deserialize)]
struct ThemeFile {
    background: String,
    border: String,
    selection: String,
    highlight: String,
    title: String,
    text: String,
    dimmed: String,
    hint: String,
    accent: String,
    row_background: String,
    incomplete: String,
    completed: String,
    completed_background: String,
    primary: String,
    success: String,
    danger: String,
}

fn color(field: &str, value: &str) -> Result<Color> {
    Color::from_str(value).with_context(|| format!("bad color for '{}': {}", field, value))
}

impl TryFrom<ThemeFile> for Theme {
    type Error = anyhow::Error;

    fn try_from(file: ThemeFile) -> Result<Self> {
        Ok(Theme {
            background: color("background", &file.background)?,
            border: color("border", &file.border)?,
            selection: color("selection", &file.selection)?,
            highlight: color("highlight", &file.highlight)?,
            title: color("title", &file.title)?,
            text: color("text", &file.text)?,
            dimmed: color("dimmed", &file.dimmed)?,
            hint: color("hint", &file.hint)?,
            accent: color("accent", &file.accent)?,
            row_background: color("row_background", &file.row_background)?,
            incomplete: color("incomplete", &file.incomplete)?,
            completed: color("completed", &file.completed)?,
            completed_background: color("completed_background", &file.completed_background)?,
            primary: color("primary", &file.primary)?,
            success: color("success", &file.success)?,
            danger: color("danger", &file.danger)?,
        })
    }
}

pub fn parse_theme(toml_str: &str) -> Result<Theme> {
    let file: ThemeFile = toml::from_str(toml_str)?;
    Theme::try_from(file)
}

pub fn load_theme(name: &str) -> Theme {
    let toml_str = match name {
        "darkly" => DARKLY_TOML,
        "flatly" => FLATLY_TOML,
        _ => {
            warn!("Unknown theme '{}', falling back to darkly", name);
            DARKLY_TOML
        }
    };

    match parse_theme(toml_str) {
        Ok(theme) => theme,
        Err(e) => {
            warn!("Failed to parse theme '{}': {}, using default darkly", name, e);
            Theme::darkly()
        }
    }
}

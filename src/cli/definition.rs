//! Command-line definition

use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::DisplayMode;
use crate::logging::DEBUG_ENV;
use crate::task::CompletionTracking;

#[derive(Debug, Parser)]
#[command(name = "todo")]
#[command(about = "Single-window to-do list manager for the terminal")]
#[command(version)]
pub struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color theme (see `todo themes`)
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// How tasks are displayed
    #[arg(long, value_enum)]
    pub view: Option<DisplayMode>,

    /// What completion is keyed by; `text` reproduces the classic behavior
    /// where rows with identical text share completion
    #[arg(long = "track-by", value_enum)]
    pub track_by: Option<CompletionTracking>,

    /// Write debug logs to the app directory
    #[arg(long, env = DEBUG_ENV, value_parser = FalseyValueParser::new())]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// List built-in color themes
    Themes,
}

//! To-Do List Manager - single-window task list for the terminal

pub mod cli;
pub mod config;
pub mod logging;
pub mod task;
pub mod tui;

//! TUI theme and styling

use ratatui::style::{Color, Modifier, Style};

use crate::task::TaskStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,
    pub highlight: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,
    pub accent: Color,

    // Task rows
    pub row_background: Color,
    pub incomplete: Color,
    pub completed: Color,
    pub completed_background: Color,

    // Buttons
    pub primary: Color,
    pub success: Color,
    pub danger: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::darkly()
    }
}

impl Theme {
    /// Dark gray window with red open tasks and green finished ones.
    pub fn darkly() -> Self {
        Self {
            background: Color::Rgb(46, 46, 46),
            border: Color::Rgb(95, 95, 95),
            selection: Color::Rgb(34, 34, 34),
            highlight: Color::Rgb(128, 128, 128),

            title: Color::Rgb(55, 90, 127),
            text: Color::Rgb(255, 255, 255),
            dimmed: Color::Rgb(136, 136, 136),
            hint: Color::Rgb(173, 181, 189),
            accent: Color::Rgb(55, 90, 127),

            row_background: Color::Rgb(60, 60, 60),
            incomplete: Color::Rgb(255, 0, 0),
            completed: Color::Rgb(0, 128, 0),
            completed_background: Color::Rgb(46, 46, 46),

            primary: Color::Rgb(55, 90, 127),
            success: Color::Rgb(0, 188, 140),
            danger: Color::Rgb(231, 76, 60),
        }
    }

    /// Style for a task row, before any selection or highlight is applied.
    pub fn task_style(&self, status: TaskStatus) -> Style {
        match status {
            TaskStatus::Incomplete => Style::default()
                .fg(self.incomplete)
                .bg(self.row_background)
                .add_modifier(Modifier::BOLD),
            TaskStatus::Completed => Style::default()
                .fg(self.completed)
                .bg(self.completed_background)
                .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT),
        }
    }
}

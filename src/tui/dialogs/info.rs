//! Blocking message box for input and selection errors

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::DialogResult;
use crate::task::TaskError;
use crate::tui::styles::Theme;

pub struct InfoDialog {
    title: String,
    message: String,
}

impl InfoDialog {
    pub fn new(title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    /// Dialog for a rejected task operation. `action` names what the user was
    /// trying to do with the selection ("complete", "remove").
    pub fn for_task_error(err: TaskError, action: &str) -> Self {
        let message = match err {
            TaskError::EmptyInput => err.to_string(),
            TaskError::NoSelection => format!("Please select a task to {}.", action),
        };
        Self::new(err.title(), &message)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => DialogResult::Close,
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 44, 8);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.danger))
            .title(format!(" ⚠ {} ", self.title))
            .title_style(Style::default().fg(theme.danger).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let message = Paragraph::new(&*self.message)
            .style(Style::default().fg(theme.text))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let button = Line::from(vec![Span::styled(
            "[ OK ]",
            Style::default().fg(theme.accent).bold(),
        )]);

        frame.render_widget(
            Paragraph::new(button).alignment(Alignment::Center),
            chunks[1],
        );
    }
}

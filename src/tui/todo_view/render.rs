//! Rendering for the main view

use ratatui::prelude::*;
use ratatui::widgets::*;

use super::{ButtonAction, Focus, TaskDisplay, TodoView, ViewLayout};
use crate::config::DisplayMode;
use crate::tui::components::{render_buttons, render_entry, Button, HelpOverlay};
use crate::tui::styles::Theme;

impl TodoView {
    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let window = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" To-Do List Manager ")
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(theme.title).bold());
        let inner = window.inner(main_chunks[0]);
        frame.render_widget(window, main_chunks[0]);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints([
                Constraint::Length(3), // entry
                Constraint::Length(1), // add button
                Constraint::Length(1),
                Constraint::Min(3), // tasks
                Constraint::Length(1), // complete / remove
                Constraint::Length(1),
                Constraint::Length(1), // quit
            ])
            .split(inner);

        let mut layout = ViewLayout {
            entry: chunks[0],
            ..ViewLayout::default()
        };

        render_entry(
            frame,
            chunks[0],
            &self.input,
            self.focus == Focus::Input && !self.has_dialog(),
            theme,
        );

        let rects = render_buttons(frame, chunks[1], &[Button::new("Add Task", theme.primary)]);
        layout.buttons.push((rects[0], ButtonAction::Add));

        layout.tasks = self.render_tasks(frame, chunks[3], theme);

        let rects = render_buttons(
            frame,
            chunks[4],
            &[
                Button::new("Complete Task", theme.success),
                Button::new("Remove Task", theme.danger),
            ],
        );
        layout.buttons.push((rects[0], ButtonAction::Complete));
        layout.buttons.push((rects[1], ButtonAction::Remove));

        let rects = render_buttons(frame, chunks[6], &[Button::new("Quit", theme.danger)]);
        layout.buttons.push((rects[0], ButtonAction::Quit));

        self.layout = layout;

        self.render_status_bar(frame, main_chunks[1], theme);

        // Overlays on top
        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }

        if let Some(dialog) = &self.info_dialog {
            dialog.render(frame, area, theme);
        }
    }

    /// Draws the task block and returns its inner area.
    fn render_tasks(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) -> Rect {
        let focused = self.focus == Focus::Tasks && !self.has_dialog();
        let border_color = if focused { theme.accent } else { theme.border };
        let entries = self.tasks.entries();
        let done = self.tasks.completed_count();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(format!(" Tasks ({}/{} done) ", done, entries.len()))
            .title_style(Style::default().fg(theme.title).bold())
            .title_bottom(
                Line::from(format!(" {} view ", self.mode.label()))
                    .style(Style::default().fg(theme.dimmed))
                    .right_aligned(),
            );

        let inner = block.inner(area);
        frame.render_widget(block, area);

        match self.mode {
            DisplayMode::List => self.list.render(frame, inner, &entries, theme, focused),
            DisplayMode::Text => self.text.render(frame, inner, &entries, theme, focused),
        }

        inner
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let hints: &[(&str, &str)] = match self.focus {
            Focus::Input => &[("Enter", "Add"), ("Tab", "Tasks"), ("Ctrl+C", "Quit")],
            Focus::Tasks => &[
                ("j/k", "Navigate"),
                ("c", "Complete"),
                ("d", "Remove"),
                ("i", "Entry"),
                ("v", "View"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("│", sep_style));
            }
            spans.push(Span::styled(format!(" {}", key), key_style));
            spans.push(Span::styled(format!(" {} ", desc), desc_style));
        }

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}

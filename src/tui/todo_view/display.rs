//! The two ways of showing tasks and tracking which one is targeted

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::task::{TaskEntry, TaskRef};
use crate::tui::styles::Theme;

/// Presentation state for the task area. Implementations own only the
/// selection/cursor; rows always come from the model snapshot.
pub trait TaskDisplay {
    /// The reference complete/remove act on, if any
    fn selection(&self) -> Option<TaskRef>;
    fn move_cursor(&mut self, delta: i32, len: usize);
    fn jump_first(&mut self, len: usize);
    fn jump_last(&mut self, len: usize);
    /// Left click `row` lines below the top of the task area
    fn click(&mut self, row: u16, len: usize);
    fn on_added(&mut self, len: usize);
    fn on_removed(&mut self, len: usize);
    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        entries: &[TaskEntry],
        theme: &Theme,
        focused: bool,
    );
}

fn render_empty(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from("No tasks yet").style(Style::default().fg(theme.dimmed)),
        Line::from("Type one above and press Enter").style(Style::default().fg(theme.hint)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// Selectable rows. Adding or removing a task drops the selection, so the
/// next complete/remove needs a fresh pick.
#[derive(Debug, Default)]
pub struct ListDisplay {
    state: ListState,
}

impl ListDisplay {
    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn select(&mut self, index: Option<usize>) {
        self.state.select(index);
    }
}

impl TaskDisplay for ListDisplay {
    fn selection(&self) -> Option<TaskRef> {
        self.state.selected().map(TaskRef::Index)
    }

    fn move_cursor(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.state.select(None);
            return;
        }

        let next = match self.state.selected() {
            None => 0,
            Some(current) if delta < 0 => current.saturating_sub(delta.unsigned_abs() as usize),
            Some(current) => (current + delta as usize).min(len - 1),
        };
        self.state.select(Some(next.min(len - 1)));
    }

    fn jump_first(&mut self, len: usize) {
        if len > 0 {
            self.state.select(Some(0));
        }
    }

    fn jump_last(&mut self, len: usize) {
        if len > 0 {
            self.state.select(Some(len - 1));
        }
    }

    fn click(&mut self, row: u16, len: usize) {
        let index = self.state.offset() + row as usize;
        if index < len {
            self.state.select(Some(index));
        }
    }

    fn on_added(&mut self, _len: usize) {
        self.state.select(None);
    }

    fn on_removed(&mut self, _len: usize) {
        self.state.select(None);
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        entries: &[TaskEntry],
        theme: &Theme,
        focused: bool,
    ) {
        if entries.is_empty() {
            render_empty(frame, area, theme);
            return;
        }

        let items: Vec<ListItem> = entries
            .iter()
            .map(|entry| ListItem::new(entry.text.clone()).style(theme.task_style(entry.status)))
            .collect();

        let selection_bg = if focused { theme.selection } else { theme.border };
        let list = List::new(items)
            .highlight_style(Style::default().bg(selection_bg))
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

/// Line-indexed display. The cursor line (1-based) is the target and stays
/// where it is across adds and removes; a cursor past the last task targets
/// nothing. Clicking also paints a highlight band on the clicked line.
#[derive(Debug)]
pub struct TextDisplay {
    cursor_line: usize,
    highlighted: Option<usize>,
    scroll: usize,
}

impl Default for TextDisplay {
    fn default() -> Self {
        Self {
            cursor_line: 1,
            highlighted: None,
            scroll: 0,
        }
    }
}

impl TextDisplay {
    pub fn cursor_line(&self) -> usize {
        self.cursor_line
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Move the cursor without touching the highlight band.
    pub fn set_cursor(&mut self, line: usize) {
        self.cursor_line = line.max(1);
    }

    fn keep_cursor_visible(&mut self, height: usize) {
        let row = self.cursor_line - 1;
        if row < self.scroll {
            self.scroll = row;
        } else if height > 0 && row >= self.scroll + height {
            self.scroll = row + 1 - height;
        }
    }
}

impl TaskDisplay for TextDisplay {
    fn selection(&self) -> Option<TaskRef> {
        Some(TaskRef::Line(self.cursor_line))
    }

    fn move_cursor(&mut self, delta: i32, len: usize) {
        let current = self.cursor_line;
        let step = delta.unsigned_abs() as usize;
        // Clamp only toward the direction of travel
        let next = if delta < 0 {
            current.min(len + 1).saturating_sub(step).max(1)
        } else {
            (current + step).min(len.max(1)).max(current)
        };
        self.set_cursor(next);
    }

    fn jump_first(&mut self, _len: usize) {
        self.set_cursor(1);
    }

    fn jump_last(&mut self, len: usize) {
        self.set_cursor(len.max(1));
    }

    fn click(&mut self, row: u16, len: usize) {
        // Below the last task lands on the trailing empty line
        let line = (self.scroll + row as usize + 1).min(len + 1);
        self.set_cursor(line);
        self.highlighted = Some(line);
    }

    fn on_added(&mut self, _len: usize) {}

    fn on_removed(&mut self, _len: usize) {
        // The highlight belonged to the deleted line's text
        self.highlighted = None;
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        entries: &[TaskEntry],
        theme: &Theme,
        focused: bool,
    ) {
        if entries.is_empty() && self.cursor_line == 1 {
            render_empty(frame, area, theme);
            return;
        }

        self.keep_cursor_visible(area.height as usize);

        let gutter_style = Style::default().fg(if focused { theme.accent } else { theme.dimmed });
        let mut lines: Vec<Line> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let line_no = i + 1;
                let mut style = theme.task_style(entry.status);
                if self.highlighted == Some(line_no) {
                    style = style.bg(theme.highlight);
                }
                let gutter = if line_no == self.cursor_line { "› " } else { "  " };
                Line::from(vec![
                    Span::styled(gutter, gutter_style),
                    Span::styled(entry.text.clone(), style),
                ])
            })
            .collect();

        // Trailing empty line, only drawn when the cursor sits on it
        if self.cursor_line > entries.len() {
            lines.push(Line::from(Span::styled("› ", gutter_style)));
        }

        let paragraph = Paragraph::new(lines).scroll((self.scroll as u16, 0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_starts_without_selection() {
        let list = ListDisplay::default();
        assert_eq!(list.selection(), None);
    }

    #[test]
    fn test_list_first_move_selects_top() {
        let mut list = ListDisplay::default();
        list.move_cursor(1, 3);
        assert_eq!(list.selection(), Some(TaskRef::Index(0)));
    }

    #[test]
    fn test_list_move_clamps() {
        let mut list = ListDisplay::default();
        list.jump_last(3);
        list.move_cursor(5, 3);
        assert_eq!(list.selected(), Some(2));
        list.move_cursor(-10, 3);
        assert_eq!(list.selected(), Some(0));
    }

    #[test]
    fn test_list_move_on_empty_clears() {
        let mut list = ListDisplay::default();
        list.select(Some(0));
        list.move_cursor(1, 0);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_list_click_below_rows_is_ignored() {
        let mut list = ListDisplay::default();
        list.click(1, 3);
        assert_eq!(list.selected(), Some(1));
        list.click(7, 3);
        assert_eq!(list.selected(), Some(1));
    }

    #[test]
    fn test_list_mutations_clear_selection() {
        let mut list = ListDisplay::default();
        list.select(Some(1));
        list.on_added(3);
        assert_eq!(list.selected(), None);

        list.select(Some(1));
        list.on_removed(2);
        assert_eq!(list.selected(), None);
    }

    #[test]
    fn test_text_cursor_starts_on_first_line() {
        let text = TextDisplay::default();
        assert_eq!(text.selection(), Some(TaskRef::Line(1)));
        assert_eq!(text.highlighted(), None);
    }

    #[test]
    fn test_text_move_clamps_to_last_task() {
        let mut text = TextDisplay::default();
        text.move_cursor(1, 3);
        assert_eq!(text.cursor_line(), 2);
        text.move_cursor(5, 3);
        assert_eq!(text.cursor_line(), 3);
        text.move_cursor(-5, 3);
        assert_eq!(text.cursor_line(), 1);
    }

    #[test]
    fn test_text_keyboard_moves_leave_highlight() {
        let mut text = TextDisplay::default();
        text.move_cursor(1, 3);
        text.jump_last(3);
        assert_eq!(text.highlighted(), None);

        text.click(0, 3);
        text.move_cursor(1, 3);
        text.jump_first(3);
        assert_eq!(text.cursor_line(), 1);
        assert_eq!(text.highlighted(), Some(1));
    }

    #[test]
    fn test_text_cursor_survives_remove() {
        let mut text = TextDisplay::default();
        text.click(2, 3);
        assert_eq!(text.highlighted(), Some(3));
        text.on_removed(2);
        assert_eq!(text.selection(), Some(TaskRef::Line(3)));
        assert_eq!(text.highlighted(), None);
    }

    #[test]
    fn test_text_click_past_end_hits_trailing_line() {
        let mut text = TextDisplay::default();
        text.click(9, 2);
        assert_eq!(text.cursor_line(), 3);
        text.click(0, 2);
        assert_eq!(text.cursor_line(), 1);
        assert_eq!(text.highlighted(), Some(1));
    }

    #[test]
    fn test_text_down_from_trailing_line_stays_put() {
        let mut text = TextDisplay::default();
        text.click(9, 2);
        assert_eq!(text.cursor_line(), 3);
        text.move_cursor(1, 2);
        assert_eq!(text.cursor_line(), 3);

        // Cursor left behind by removals only ever moves up from there
        text.set_cursor(5);
        text.move_cursor(1, 2);
        assert_eq!(text.cursor_line(), 5);
        text.move_cursor(-1, 2);
        assert_eq!(text.cursor_line(), 2);
    }

    #[test]
    fn test_text_scroll_follows_cursor() {
        let mut text = TextDisplay::default();
        text.set_cursor(12);
        text.keep_cursor_visible(5);
        assert_eq!(text.scroll, 7);
        text.set_cursor(3);
        text.keep_cursor_visible(5);
        assert_eq!(text.scroll, 2);
    }
}

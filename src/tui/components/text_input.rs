//! Task entry field

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use tui_input::Input;

use crate::tui::styles::Theme;

const PLACEHOLDER: &str = "Type a task and press Enter";

/// Renders the bordered entry box the user types new tasks into.
///
/// When focused, the character under the cursor is drawn in inverse video.
/// An empty, unfocused entry shows a placeholder instead.
pub fn render_entry(frame: &mut Frame, area: Rect, input: &Input, is_focused: bool, theme: &Theme) {
    let border_color = if is_focused { theme.accent } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" New task ")
        .title_style(Style::default().fg(theme.title).bold());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = input.value();
    let value_style = Style::default().fg(theme.text).bold();

    // Keep the cursor inside the box on long input
    let width = inner.width.max(1) as usize;
    let cursor_pos = input.visual_cursor();
    let scroll = cursor_pos.saturating_sub(width - 1);

    let mut spans = Vec::new();
    if value.is_empty() && !is_focused {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(theme.dimmed)));
    } else if is_focused {
        let cursor_style = Style::default().fg(theme.background).bg(theme.text);
        let visible: Vec<char> = value.chars().skip(scroll).collect();
        let cursor_in_view = cursor_pos - scroll;

        let before: String = visible.iter().take(cursor_in_view).collect();
        let under = visible
            .get(cursor_in_view)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = visible.iter().skip(cursor_in_view + 1).collect();

        if !before.is_empty() {
            spans.push(Span::styled(before, value_style));
        }
        spans.push(Span::styled(under, cursor_style));
        if !after.is_empty() {
            spans.push(Span::styled(after, value_style));
        }
    } else {
        spans.push(Span::styled(value, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

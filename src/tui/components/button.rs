//! Clickable button row

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

const GAP: u16 = 3;

pub struct Button<'a> {
    pub label: &'a str,
    pub color: Color,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, color: Color) -> Self {
        Self { label, color }
    }

    fn text(&self) -> String {
        format!("[ {} ]", self.label)
    }

    fn width(&self) -> u16 {
        self.text().width() as u16
    }
}

/// Draws the buttons centered on one line and returns the rectangle each one
/// occupies, in the same order, for mouse hit-testing.
pub fn render_buttons(frame: &mut Frame, area: Rect, buttons: &[Button]) -> Vec<Rect> {
    let total: u16 = buttons.iter().map(Button::width).sum::<u16>()
        + GAP * buttons.len().saturating_sub(1) as u16;
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let right = area.x + area.width;

    let mut rects = Vec::with_capacity(buttons.len());
    for button in buttons {
        let width = button.width().min(right.saturating_sub(x));
        let rect = Rect {
            x,
            y: area.y,
            width,
            height: area.height.min(1),
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                button.text(),
                Style::default().fg(button.color).bold(),
            )),
            rect,
        );
        rects.push(rect);
        x = x.saturating_add(width + GAP).min(right);
    }
    rects
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_buttons_are_laid_out_left_to_right() {
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        let mut rects = Vec::new();
        terminal
            .draw(|f| {
                let area = f.area();
                rects = render_buttons(
                    f,
                    area,
                    &[
                        Button::new("Complete Task", Color::Green),
                        Button::new("Remove Task", Color::Red),
                    ],
                );
            })
            .unwrap();

        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].width, "[ Complete Task ]".len() as u16);
        assert_eq!(rects[1].x, rects[0].x + rects[0].width + GAP);
    }

    #[test]
    fn test_buttons_are_centered() {
        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        let mut rects = Vec::new();
        terminal
            .draw(|f| {
                let area = f.area();
                rects = render_buttons(f, area, &[Button::new("Quit", Color::Red)]);
            })
            .unwrap();

        // "[ Quit ]" is 8 wide, leaving 16 on each side
        assert_eq!(rects[0].x, 16);
    }
}

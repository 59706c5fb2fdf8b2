//! Main TUI application

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures_util::StreamExt;
use ratatui::prelude::*;
use tracing::info;

use super::styles::Theme;
use super::themes::load_theme;
use super::todo_view::TodoView;
use crate::config::Config;
use crate::task::TaskList;

pub struct App {
    view: TodoView,
    should_quit: bool,
    theme: Theme,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let tasks = TaskList::new(config.tasks.completion_tracking);
        let view = TodoView::new(tasks, config.display.mode);
        let theme = load_theme(&config.theme.name);

        info!(
            "Starting with theme '{}', {} view, completion tracked {:?}",
            config.theme.name,
            view.mode().label(),
            view.tasks().tracking()
        );

        Self {
            view,
            should_quit: false,
            theme,
        }
    }

    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<()> {
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        let mut events = EventStream::new();
        while let Some(event) = events.next().await {
            let redraw = self.handle_event(event?);

            if self.should_quit {
                break;
            }
            if redraw {
                terminal.draw(|f| self.render(f))?;
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.view.render(frame, area, &self.theme);
    }

    /// Apply one terminal event. Returns whether the screen needs redrawing.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(key);
                true
            }
            Event::Mouse(mouse) => {
                if let Some(Action::Quit) = self.view.handle_mouse(mouse) {
                    self.should_quit = true;
                }
                true
            }
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Global keybindings
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.should_quit = true;
            return;
        }

        if let Some(Action::Quit) = self.view.handle_key(key) {
            self.should_quit = true;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
}

//! Main view - task entry, task display and action buttons

mod display;
mod render;


use crossterm::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::debug;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

pub use display::{ListDisplay, TaskDisplay, TextDisplay};

use super::app::Action;
use super::dialogs::{DialogResult, InfoDialog};
use crate::config::DisplayMode;
use crate::task::{TaskEntry, TaskError, TaskList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Tasks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Add,
    Complete,
    Remove,
    Quit,
}

/// Where things landed on the last draw, for mouse hit-testing
#[derive(Debug, Default, Clone)]
struct ViewLayout {
    entry: Rect,
    tasks: Rect,
    buttons: Vec<(Rect, ButtonAction)>,
}

pub struct TodoView {
    tasks: TaskList,
    input: Input,
    focus: Focus,
    mode: DisplayMode,
    list: ListDisplay,
    text: TextDisplay,

    // Dialogs
    info_dialog: Option<InfoDialog>,
    show_help: bool,

    layout: ViewLayout,
}

impl TodoView {
    pub fn new(tasks: TaskList, mode: DisplayMode) -> Self {
        Self {
            tasks,
            input: Input::default(),
            focus: Focus::Input,
            mode,
            list: ListDisplay::default(),
            text: TextDisplay::default(),
            info_dialog: None,
            show_help: false,
            layout: ViewLayout::default(),
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn entries(&self) -> Vec<TaskEntry> {
        self.tasks.entries()
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help || self.info_dialog.is_some()
    }

    pub fn info_dialog(&self) -> Option<&InfoDialog> {
        self.info_dialog.as_ref()
    }

    fn display(&self) -> &dyn TaskDisplay {
        match self.mode {
            DisplayMode::List => &self.list,
            DisplayMode::Text => &self.text,
        }
    }

    fn display_mut(&mut self) -> &mut dyn TaskDisplay {
        match self.mode {
            DisplayMode::List => &mut self.list,
            DisplayMode::Text => &mut self.text,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // The error box blocks everything until dismissed
        if let Some(dialog) = &mut self.info_dialog {
            if let DialogResult::Close = dialog.handle_key(key) {
                self.info_dialog = None;
            }
            return None;
        }

        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Tasks => self.handle_tasks_key(key),
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter => return self.press(ButtonAction::Add),
            KeyCode::Tab | KeyCode::Esc => self.focus = Focus::Tasks,
            _ => {
                self.input.handle_event(&Event::Key(key));
            }
        }
        None
    }

    fn handle_tasks_key(&mut self, key: KeyEvent) -> Option<Action> {
        let len = self.tasks.len();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return self.press(ButtonAction::Quit),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('a') => self.focus = Focus::Input,
            KeyCode::Up | KeyCode::Char('k') => self.display_mut().move_cursor(-1, len),
            KeyCode::Down | KeyCode::Char('j') => self.display_mut().move_cursor(1, len),
            KeyCode::PageUp => self.display_mut().move_cursor(-10, len),
            KeyCode::PageDown => self.display_mut().move_cursor(10, len),
            KeyCode::Home | KeyCode::Char('g') => self.display_mut().jump_first(len),
            KeyCode::End | KeyCode::Char('G') => self.display_mut().jump_last(len),
            KeyCode::Char('c') | KeyCode::Char(' ') => return self.press(ButtonAction::Complete),
            KeyCode::Char('d') | KeyCode::Delete => return self.press(ButtonAction::Remove),
            KeyCode::Char('v') => self.toggle_mode(),
            _ => {}
        }
        None
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if self.has_dialog() {
            return None;
        }

        let pos = Position::new(mouse.column, mouse.row);
        let len = self.tasks.len();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let button = self
                    .layout
                    .buttons
                    .iter()
                    .find(|(rect, _)| rect.contains(pos))
                    .map(|(_, action)| *action);
                if let Some(action) = button {
                    return self.press(action);
                }

                if self.layout.tasks.contains(pos) {
                    let row = pos.y - self.layout.tasks.y;
                    self.display_mut().click(row, len);
                    self.focus = Focus::Tasks;
                } else if self.layout.entry.contains(pos) {
                    self.focus = Focus::Input;
                }
            }
            MouseEventKind::ScrollDown if self.layout.tasks.contains(pos) => {
                self.display_mut().move_cursor(1, len);
            }
            MouseEventKind::ScrollUp if self.layout.tasks.contains(pos) => {
                self.display_mut().move_cursor(-1, len);
            }
            _ => {}
        }
        None
    }

    /// Run a button's action, whether it came from a key or a click.
    fn press(&mut self, action: ButtonAction) -> Option<Action> {
        match action {
            ButtonAction::Add => self.add_from_input(),
            ButtonAction::Complete => self.complete_selected(),
            ButtonAction::Remove => self.remove_selected(),
            ButtonAction::Quit => return Some(Action::Quit),
        }
        None
    }

    fn add_from_input(&mut self) {
        match self.tasks.add(self.input.value()) {
            Ok(id) => {
                debug!("Task {} added from entry", id);
                self.input.reset();
                let len = self.tasks.len();
                self.display_mut().on_added(len);
            }
            Err(e) => self.show_error(e, "add"),
        }
    }

    fn complete_selected(&mut self) {
        let selection = self.display().selection();
        match self.tasks.complete(selection) {
            Ok(true) => {}
            Ok(false) => debug!("Selected task already completed, nothing to do"),
            Err(e) => self.show_error(e, "complete"),
        }
    }

    fn remove_selected(&mut self) {
        let selection = self.display().selection();
        match self.tasks.remove(selection) {
            Ok(_) => {
                let len = self.tasks.len();
                self.display_mut().on_removed(len);
            }
            Err(e) => self.show_error(e, "remove"),
        }
    }

    fn show_error(&mut self, err: TaskError, action: &str) {
        debug!("Rejected {}: {:?}", action, err);
        self.info_dialog = Some(InfoDialog::for_task_error(err, action));
    }

    /// Switch presentation, carrying the current target across.
    fn toggle_mode(&mut self) {
        match self.mode {
            DisplayMode::List => {
                if let Some(index) = self.list.selected() {
                    self.text.set_cursor(index + 1);
                }
            }
            DisplayMode::Text => {
                let index = self.tasks.resolve(self.text.selection()).ok();
                self.list.select(index);
            }
        }
        self.mode = self.mode.toggled();
        debug!("Switched to {} view", self.mode.label());
    }
}

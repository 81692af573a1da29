//! Entry form screen state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use intake::form::{FormController, FormField, SUCCESS_MESSAGE};
use intake_db::CustomerDb;
use ratatui::Frame;

use super::{ui, Screen};

const PAGE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Success,
    Validation,
    Error,
}

/// Modal status shown after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

pub struct FormApp {
    pub controller: FormController<CustomerDb>,
    pub focus: FormField,
    pub dialog: Option<StatusDialog>,
    /// Highlighted row in the "Recently Submitted" grid.
    pub grid_selected: usize,
    pub running: bool,
}

impl FormApp {
    pub fn new(controller: FormController<CustomerDb>) -> Self {
        Self {
            controller,
            focus: FormField::Name,
            dialog: None,
            grid_selected: 0,
            running: true,
        }
    }

    fn grid_len(&self) -> usize {
        self.controller.viewer().grid().map(|g| g.rows.len()).unwrap_or(0)
    }

    fn move_grid(&mut self, down: bool, step: usize) {
        let len = self.grid_len();
        if len == 0 {
            self.grid_selected = 0;
            return;
        }
        self.grid_selected = if down {
            (self.grid_selected + step).min(len - 1)
        } else {
            self.grid_selected.saturating_sub(step)
        };
    }

    fn submit(&mut self) {
        self.dialog = Some(match self.controller.submit() {
            Ok(_) => {
                self.focus = FormField::Name;
                self.grid_selected = 0;
                StatusDialog {
                    kind: DialogKind::Success,
                    title: "Success".to_string(),
                    message: SUCCESS_MESSAGE.to_string(),
                }
            }
            Err(err) => StatusDialog {
                kind: match err {
                    intake::SubmitError::Validation(_) => DialogKind::Validation,
                    intake::SubmitError::Store(_) => DialogKind::Error,
                },
                title: err.title().to_string(),
                message: err.to_string(),
            },
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Any key dismisses the status dialog and does nothing else.
        if self.dialog.take().is_some() {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.running = false,
            KeyCode::Char('l') if ctrl => {
                self.controller.clear();
                self.focus = FormField::Name;
            }
            KeyCode::Char('r') if ctrl => self.controller.refresh(),
            KeyCode::Esc => self.running = false,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::PageDown => self.move_grid(true, PAGE),
            KeyCode::PageUp => self.move_grid(false, PAGE),
            KeyCode::Left if !self.focus.is_text() => self.controller.cycle_contact(false),
            KeyCode::Right | KeyCode::Char(' ') if !self.focus.is_text() => {
                self.controller.cycle_contact(true)
            }
            KeyCode::Backspace => self.controller.pop_char(self.focus),
            KeyCode::Char(c) if !ctrl => self.controller.push_char(self.focus, c),
            _ => {}
        }
    }
}

impl Screen for FormApp {
    fn draw(&self, frame: &mut Frame) {
        ui::draw_form(frame, self);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        FormApp::handle_key(self, key);
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

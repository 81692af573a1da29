//! Standalone table viewer screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use intake::GenericViewer;
use ratatui::Frame;

use super::{ui, Screen};

const PAGE: usize = 10;

pub struct ViewerApp {
    pub viewer: GenericViewer,
    pub selected: usize,
    pub running: bool,
}

impl ViewerApp {
    pub fn new(viewer: GenericViewer) -> Self {
        Self {
            viewer,
            selected: 0,
            running: true,
        }
    }

    fn row_count(&self) -> usize {
        self.viewer.grid().map(|g| g.rows.len()).unwrap_or(0)
    }

    fn select(&mut self, target: usize) {
        let len = self.row_count();
        self.selected = if len == 0 { 0 } else { target.min(len - 1) };
    }

    pub fn refresh(&mut self) {
        self.viewer.refresh();
        // Keep the highlight in range after the row count changes.
        self.select(self.selected);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Down => self.select(self.selected + 1),
            KeyCode::Up => self.select(self.selected.saturating_sub(1)),
            KeyCode::PageDown => self.select(self.selected + PAGE),
            KeyCode::PageUp => self.select(self.selected.saturating_sub(PAGE)),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(usize::MAX),
            _ => {}
        }
    }
}

impl Screen for ViewerApp {
    fn draw(&self, frame: &mut Frame) {
        ui::draw_viewer(frame, self);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        ViewerApp::handle_key(self, key);
    }

    fn is_running(&self) -> bool {
        self.running
    }
}

//! Terminal User Interface for Intake
//!
//! Two screens share one loop: the entry form with its bound grid, and the
//! standalone viewer that renders whatever table a database file holds.

pub mod components;
pub mod event;
pub mod form_app;
pub mod ui;
pub mod viewer_app;

use anyhow::Result;
use crossterm::{
    event::KeyEvent,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use intake::{DiscoveredTableSource, FormController, TableViewer};
use intake_db::CustomerDb;
use ratatui::{backend::CrosstermBackend, prelude::*, Terminal};
use std::io::stdout;
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::cli::tui::event::{Event, EventHandler};
use crate::cli::tui::form_app::FormApp;
use crate::cli::tui::viewer_app::ViewerApp;

const TICK_RATE: Duration = Duration::from_millis(250);

/// A full-screen view driven by the shared event loop.
pub trait Screen {
    fn draw(&self, frame: &mut Frame);
    fn handle_key(&mut self, key: KeyEvent);
    fn is_running(&self) -> bool;
}

/// Run the entry form against `database`, creating the file and table if needed.
pub fn run_form(database: &Path) -> Result<()> {
    let db = CustomerDb::open(database)?;
    info!(path = %database.display(), "Starting entry form");
    let mut app = FormApp::new(FormController::new(db));
    run_screen(&mut app)
}

/// Run the standalone viewer. A missing file is reported on screen, never created.
pub fn run_viewer(database: &Path) -> Result<()> {
    info!(path = %database.display(), "Starting table viewer");
    let viewer = TableViewer::open(DiscoveredTableSource::new(database));
    let mut app = ViewerApp::new(viewer);
    run_screen(&mut app)
}

fn run_screen<S: Screen>(screen: &mut S) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(TICK_RATE);
    let result = run_app(&mut terminal, screen, &events);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Run the application loop
fn run_app<B: Backend, S: Screen>(
    terminal: &mut Terminal<B>,
    screen: &mut S,
    events: &EventHandler,
) -> Result<()> {
    while screen.is_running() {
        terminal.draw(|frame| screen.draw(frame))?;

        match events.next()? {
            Event::Key(key) => screen.handle_key(key),
            Event::Tick => {}
            Event::Resize => {} // Ratatui handles resize
        }
    }

    Ok(())
}

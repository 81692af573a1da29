//! UI rendering for the TUI

use intake::{FormField, TableGrid, ViewerState};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table, TableState, Wrap},
};

use super::components::modal::render_message_box;
use super::form_app::{DialogKind, FormApp};
use super::viewer_app::ViewerApp;

const LABEL_WIDTH: usize = 24;
const MIN_COLUMN_WIDTH: usize = 4;
const MAX_COLUMN_WIDTH: usize = 40;

/// Draw the entry form with its bound grid underneath.
pub fn draw_form(frame: &mut Frame, app: &FormApp) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(FormField::ALL.len() as u16 + 2),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_title_bar(frame, chunks[0], " Customer Information ");
    draw_fields(frame, chunks[1], app);

    let hint = Paragraph::new(
        " [Tab/↑↓] Move  [←→/Space] Contact  [Enter] Submit  [Ctrl+L] Clear  [Ctrl+R] Refresh",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, chunks[2]);

    match app.controller.viewer().state() {
        ViewerState::Ready(grid) => draw_grid(frame, chunks[3], grid, app.grid_selected),
        ViewerState::Error(message) => draw_status(frame, chunks[3], "Recently Submitted", message),
    }

    let rows = app.controller.viewer().grid().map(|g| g.rows.len()).unwrap_or(0);
    draw_footer(frame, chunks[4], " [PgUp/PgDn] Scroll  [Esc] Quit ", rows);

    if let Some(dialog) = &app.dialog {
        let accent = match dialog.kind {
            DialogKind::Success => Color::Green,
            DialogKind::Validation => Color::Yellow,
            DialogKind::Error => Color::Red,
        };
        render_message_box(frame, area, &dialog.title, &dialog.message, accent);
    }
}

fn draw_fields(frame: &mut Frame, area: Rect, app: &FormApp) {
    let block = Block::default()
        .title(" Enter Your Information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let form = app.controller.form();
    let mut lines = Vec::with_capacity(FormField::ALL.len());
    for field in FormField::ALL {
        let focused = field == app.focus;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value = if field.is_text() {
            form.value(field).to_string()
        } else {
            format!("< {} >", form.value(field))
        };
        let value_style = if focused {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<width$}", field.label(), width = LABEL_WIDTH), label_style),
            Span::styled(value, value_style),
        ]));
    }
    frame.render_widget(Paragraph::new(lines), inner);

    if app.dialog.is_none() && app.focus.is_text() {
        let row = FormField::ALL
            .iter()
            .position(|f| *f == app.focus)
            .unwrap_or(0) as u16;
        let typed = form.value(app.focus).chars().count() as u16;
        let x = (inner.x + 1 + LABEL_WIDTH as u16 + typed).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y + row));
    }
}

/// Draw the standalone viewer.
pub fn draw_viewer(frame: &mut Frame, app: &ViewerApp) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let path = app.viewer.source().path().display().to_string();
    draw_title_bar(frame, chunks[0], &format!(" Table Viewer: {} ", path));

    match app.viewer.state() {
        ViewerState::Ready(grid) => draw_grid(frame, chunks[1], grid, app.selected),
        ViewerState::Error(message) => draw_status(frame, chunks[1], "Status", message),
    }

    let rows = app.viewer.grid().map(|g| g.rows.len()).unwrap_or(0);
    draw_footer(frame, chunks[2], " [r] Refresh  [↑↓] Scroll  [q] Quit ", rows);
}

fn draw_title_bar(frame: &mut Frame, area: Rect, title: &str) {
    let bar = Paragraph::new(title.to_string())
        .style(Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(bar, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, keys: &str, rows: usize) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(keys.to_string(), Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {} rows", rows), Style::default().fg(Color::Gray)),
    ]));
    frame.render_widget(footer, area);
}

fn draw_status(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let status = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(status, area);
}

/// Column widths sized to content, clamped to a readable range.
fn column_widths(grid: &TableGrid) -> Vec<Constraint> {
    grid.columns
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let widest = grid
                .rows
                .iter()
                .filter_map(|row| row.get(idx))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(name.chars().count());
            Constraint::Length(widest.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH) as u16)
        })
        .collect()
}

/// Shared grid renderer for both viewers.
pub fn draw_grid(frame: &mut Frame, area: Rect, grid: &TableGrid, selected: usize) {
    let header = Row::new(grid.columns.iter().map(|c| c.as_str()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    let rows = grid
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(|cell| cell.as_str())));

    let table = Table::new(rows, column_widths(grid))
        .header(header)
        .column_spacing(2)
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .block(
            Block::default()
                .title(format!(" {} ", grid.title))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Gray)),
        );

    let mut state = if grid.rows.is_empty() {
        TableState::default()
    } else {
        TableState::default().with_selected(Some(selected.min(grid.rows.len() - 1)))
    };
    frame.render_stateful_widget(table, area, &mut state);
}

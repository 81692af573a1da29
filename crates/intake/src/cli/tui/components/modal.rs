use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

#[derive(Clone, Copy, Debug)]
pub struct ModalLayout {
    pub body: Rect,
    pub footer: Rect,
}

/// Clear a centered box, draw its border and split it into body and footer.
pub fn render_modal(
    frame: &mut Frame,
    area: Rect,
    max_width: u16,
    max_height: u16,
    footer_height: u16,
    title: &str,
    border_style: Style,
) -> ModalLayout {
    let dialog = centered_area(area, max_width, max_height);
    frame.render_widget(Clear, dialog);

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
        .split(inner);

    ModalLayout {
        body: chunks[0],
        footer: chunks[1],
    }
}

/// A message box: title, wrapped message, dismiss hint.
pub fn render_message_box(frame: &mut Frame, area: Rect, title: &str, message: &str, accent: Color) {
    let layout = render_modal(
        frame,
        area,
        60,
        8,
        1,
        title,
        Style::default().fg(accent),
    );
    let body = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true });
    frame.render_widget(body, layout.body);
    let footer = Paragraph::new("[any key] OK")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout.footer);
}

pub fn centered_area(area: Rect, max_width: u16, max_height: u16) -> Rect {
    let width = area.width.min(max_width);
    let height = area.height.min(max_height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_area_fits_inside() {
        let outer = Rect::new(0, 0, 100, 30);
        let inner = centered_area(outer, 60, 8);
        assert_eq!(inner, Rect::new(20, 11, 60, 8));

        let tiny = Rect::new(0, 0, 20, 4);
        assert_eq!(centered_area(tiny, 60, 8), tiny);
    }
}

//! Result overlay shown when a game ends.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_MIN_WIDTH: u16 = 34;
const DIALOG_HEIGHT: u16 = 6;

/// Renders a centered dialog with the result and the restart/quit keys.
pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let width = DIALOG_MIN_WIDTH.max(message.chars().count() as u16 + 6);
    let dialog_area = centered_rect(width, DIALOG_HEIGHT, area);

    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            " Game over ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));

    let key = Style::default().fg(Color::Green).add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[r]", key),
            Span::raw(" Restart  "),
            Span::styled("[q]", key),
            Span::raw(" Quit  "),
            Span::styled("[Esc]", key),
            Span::raw(" Close"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(ratatui::layout::Alignment::Center)
        .style(Style::default().bg(Color::Black));

    frame.render_widget(paragraph, dialog_area);
}

/// Computes a centered rectangle, clamped to `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .split(area);

    Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}

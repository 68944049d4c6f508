//! Ticket and direct-call section

use crate::constants::{HEADER_CREATE_TICKET, HEADER_DIRECT_CALL};
use crate::ui::components::dialogs::common::create_section_block;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct CommandsPanel;

impl CommandsPanel {
    /// `enabled` greys out the ticket command while a request is in flight.
    /// The direct call stays available.
    pub fn render(f: &mut Frame, area: Rect, enabled: bool, ticket_summary: &str) {
        let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);

        let ticket_color = if enabled { Color::Yellow } else { Color::DarkGray };
        let ticket = Paragraph::new(vec![
            Self::key_line("Ctrl+T", "create sample ticket", ticket_color),
            Line::from(Span::styled(ticket_summary.to_string(), Style::default().fg(Color::Gray))),
        ])
        .block(create_section_block(HEADER_CREATE_TICKET, ticket_color));
        f.render_widget(ticket, chunks[0]);

        let direct = Paragraph::new(vec![
            Self::key_line("Ctrl+L", "list running terminals", Color::Blue),
            Line::from(Span::styled("Result is written to the logs (Ctrl+G)", Style::default().fg(Color::Gray))),
        ])
        .block(create_section_block(HEADER_DIRECT_CALL, Color::Blue));
        f.render_widget(direct, chunks[1]);
    }

    fn key_line(key: &'static str, label: &'static str, color: Color) -> Line<'static> {
        Line::from(vec![
            Span::styled(key, Style::default().fg(color)),
            Span::raw(" "),
            Span::styled(label, Style::default().fg(Color::White)),
        ])
    }
}

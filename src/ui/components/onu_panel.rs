//! ONU details section

use crate::constants::{HEADER_ONU_DETAILS, HEADER_ONU_INFORMATION};
use crate::models::OnuDetails;
use crate::ui::components::dialogs::common::create_section_block;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct OnuPanel;

impl OnuPanel {
    pub fn render(f: &mut Frame, area: Rect, details: Option<&OnuDetails>, target_label: &str) {
        let block = create_section_block(HEADER_ONU_DETAILS, Color::Magenta);

        let mut lines = Vec::new();
        match details {
            Some(details) => {
                lines.push(Line::from(Span::styled(
                    HEADER_ONU_INFORMATION,
                    Style::default().add_modifier(Modifier::BOLD),
                )));
                lines.extend(
                    Self::field_rows(details)
                        .into_iter()
                        .map(|(label, value)| Self::field_line(label, value)),
                );
            }
            None => lines.push(Line::from(Span::styled(
                format!("Press Ctrl+O to look up {}", target_label),
                Style::default().fg(Color::DarkGray),
            ))),
        }

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Label/value pairs shown for a device. Missing values render as "-".
    pub fn field_rows(details: &OnuDetails) -> [(&'static str, String); 4] {
        let show = |value: &Option<String>| value.clone().unwrap_or_else(|| "-".to_string());
        [
            ("Serial Number", show(&details.serial_number)),
            ("Distance", show(&details.onu_distance)),
            ("Online Duration", show(&details.online_duration)),
            ("IP Address", show(&details.ip_remote)),
        ]
    }

    fn field_line(label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{}: ", label), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    }
}

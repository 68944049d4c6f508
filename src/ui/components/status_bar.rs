//! Status bar component

use crate::constants::{STATUS_IDLE, STATUS_SEARCHING};
use crate::ui::example::ExampleState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    pub fn status_text(state: &ExampleState) -> &'static str {
        if state.loading {
            STATUS_SEARCHING
        } else {
            STATUS_IDLE
        }
    }

    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, state: &ExampleState) {
        let status_color = if state.loading {
            Color::Yellow
        } else if state.error_message.is_some() {
            Color::Red
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(Self::status_text(state))
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}

//! Customer search section: query input, error line and result rows

use crate::constants::{HEADER_CUSTOMER_SEARCH, HEADER_RESULTS, NO_CUSTOMERS_FOUND, SEARCH_PLACEHOLDER};
use crate::ui::components::dialogs::common::{create_input_paragraph, create_section_block};
use crate::ui::example::ExampleState;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

pub struct SearchPanel;

impl SearchPanel {
    pub fn render(f: &mut Frame, area: Rect, state: &ExampleState) {
        let block = create_section_block(HEADER_CUSTOMER_SEARCH, Color::Cyan);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = LayoutManager::search_layout(inner);

        let input = create_input_paragraph(&state.search_query, SEARCH_PLACEHOLDER, state.controls_enabled());
        f.render_widget(input, chunks[0]);

        if let Some(error) = &state.error_message {
            let error_line = Paragraph::new(Self::error_line(error)).style(Style::default().fg(Color::Red));
            f.render_widget(error_line, chunks[1]);
        }

        if let Some(rows) = state.result_lines() {
            f.render_widget(Self::results_list(rows), chunks[2]);
        }
    }

    pub fn error_line(message: &str) -> String {
        format!("Error: {}", message)
    }

    fn results_list(rows: Vec<String>) -> List<'static> {
        let mut items = vec![ListItem::new(Line::from(Span::styled(
            HEADER_RESULTS,
            Style::default().add_modifier(Modifier::BOLD),
        )))];

        if rows.is_empty() {
            items.push(ListItem::new(Span::styled(
                NO_CUSTOMERS_FOUND,
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            items.extend(
                rows.into_iter()
                    .map(|row| ListItem::new(Span::styled(row, Style::default().fg(Color::White)))),
            );
        }

        List::new(items)
    }
}

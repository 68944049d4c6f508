use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Frame,
};

/// Slice `lines` to the visible window and update the scrollbar to match.
///
/// Returns the text to show and the offset clamped to the content.
fn visible_window(
    lines: &[&str],
    visible_height: usize,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> (String, usize) {
    let total_lines = lines.len();
    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    (text, clamped_offset)
}

fn render_scrollbar(f: &mut Frame, area: Rect, scrollbar_state: &mut ScrollbarState) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));

    f.render_stateful_widget(scrollbar, area, scrollbar_state);
}

fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let instructions = "Press Enter or Esc to dismiss • j/k to scroll if needed";

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let lines: Vec<&str> = message.lines().collect();
    let visible_height = content_area.height as usize;
    let overflows = lines.len() > visible_height;
    let (message_text, clamped_offset) = if overflows {
        visible_window(&lines, visible_height, scroll_offset, scrollbar_state)
    } else {
        (message.to_string(), 0)
    };

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions_paragraph = Paragraph::new(instructions)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, content_area);
    f.render_widget(instructions_paragraph, instructions_area);

    if overflows {
        render_scrollbar(f, content_area, scrollbar_state);
    }
    clamped_offset
}

/// Acknowledgment for a completed action
pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    render_message_dialog(f, area, "✅ Success", Color::Green, message, scroll_offset, scrollbar_state)
}

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    render_message_dialog(f, area, "⚠ Error", Color::Red, message, scroll_offset, scrollbar_state)
}

pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let help_content = r"
NOC CONSOLE - Backend API Client
================================

CUSTOMER SEARCH
---------------
Type        Edit the customer query
Backspace   Delete last character
Ctrl+U      Clear the query
Enter       Search customers and invoices

DEVICE & TICKETS
----------------
Ctrl+O      Look up the sample ONU
Ctrl+T      Create the sample ticket
Ctrl+L      List running terminals (result in logs)

These three are disabled while a request is running,
except the terminal listing.

GENERAL
-------
Ctrl+G      Show logs
F1          Toggle this help
Esc         Close dialog / quit
Ctrl+C      Quit

USAGE NOTES
-----------
Backend errors are shown under the search box.
Check the logs for detailed API responses.
Ensure the backend is running (default localhost:8001).
Samples are configured in the [samples] config section.
";

    let help_area = LayoutManager::centered_rect(70, 70, area);
    f.render_widget(Clear, help_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Help - Press 'Esc' or 'F1' to close")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Cyan));

    let content_area = Rect::new(
        help_area.x + 1,
        help_area.y + 1,
        help_area.width.saturating_sub(2),
        help_area.height.saturating_sub(2),
    );

    let lines: Vec<&str> = help_content.lines().collect();
    let visible_height = content_area.height as usize;
    let (help_text, clamped_offset) = visible_window(&lines, visible_height, scroll_offset, scrollbar_state);

    f.render_widget(block, help_area);
    f.render_widget(
        Paragraph::new(help_text).style(Style::default().fg(Color::White)),
        content_area,
    );

    if lines.len() > visible_height {
        render_scrollbar(f, content_area, scrollbar_state);
    }
    clamped_offset
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let logs_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, logs_area);

    let logs = logger.get_logs();
    let logs_content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };

    let lines: Vec<&str> = logs_content.lines().collect();
    let visible_height = logs_area.height.saturating_sub(2) as usize;
    let (logs_text, clamped_offset) = visible_window(&lines, visible_height, scroll_offset, scrollbar_state);

    let logs_paragraph = Paragraph::new(logs_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(DIALOG_TITLE_LOGS)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(logs_paragraph, logs_area);

    if lines.len() > visible_height {
        render_scrollbar(f, logs_area, scrollbar_state);
    }
    clamped_offset
}

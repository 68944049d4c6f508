use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled section block
pub fn create_section_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block with a visual cursor.
///
/// An empty buffer shows `placeholder` instead; a disabled field drops the
/// cursor and dims the text.
pub fn create_input_paragraph<'a>(input_buffer: &str, placeholder: &str, enabled: bool) -> Paragraph<'a> {
    let cursor_char = if enabled { "█" } else { "" };
    let (text, text_color) = if input_buffer.is_empty() {
        (format!("{}{}", cursor_char, placeholder), Color::DarkGray)
    } else {
        (format!("{}{}", input_buffer, cursor_char), Color::White)
    };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(if enabled { Color::Gray } else { Color::DarkGray }));

    Paragraph::new(text)
        .block(input_block)
        .style(Style::default().fg(text_color))
}

//! Layout management and calculations

use crate::constants::{ONU_SECTION_HEIGHT, SEARCH_SECTION_MIN_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the example screen, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub search: Rect,
    pub onu: Rect,
    pub commands: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into its sections. The search section takes whatever
    /// height is left so long result lists get the room.
    #[must_use]
    pub fn screen_layout(area: Rect) -> ScreenAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(SEARCH_SECTION_MIN_HEIGHT),
                Constraint::Length(ONU_SECTION_HEIGHT),
                Constraint::Length(4),
                Constraint::Length(1),
            ])
            .split(area);

        ScreenAreas {
            title: chunks[0],
            search: chunks[1],
            onu: chunks[2],
            commands: chunks[3],
            status: chunks[4],
        }
    }

    /// Split the search section into input box, error line and results
    #[must_use]
    pub fn search_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
            .split(area)
            .to_vec()
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Self::centered_columns(percent_x, popup_layout[1])
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(height_lines), Constraint::Min(0)])
            .split(r);

        Self::centered_columns(percent_x, popup_layout[1])
    }

    fn centered_columns(percent_x: u16, r: Rect) -> Rect {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(r)[1]
    }
}

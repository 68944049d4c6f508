//! Modal dialog component.
//!
//! Hosts the info (acknowledgment), error, help and logs dialogs. While a
//! dialog is open it takes every key press.

use crate::logger::{self, Logger};
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::core::{
    actions::{Action, DialogType},
    Component,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

const PAGE_SIZE: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Logger,
}

impl DialogComponent {
    pub fn new() -> Self {
        Self::with_logger(logger::global().clone())
    }

    pub fn with_logger(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::default(),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.dialog_type = Some(dialog_type);
        self.scroll_offset = 0;
        self.scrollbar_state = ScrollbarState::default();
    }

    pub fn hide(&mut self) {
        self.dialog_type = None;
        self.scroll_offset = 0;
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    /// Keys shared by every scrollable dialog
    fn handle_scroll_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(PAGE_SIZE),
            KeyCode::PageDown => self.scroll_down(PAGE_SIZE),
            KeyCode::Home => self.scroll_offset = 0,
            // Clamped at render time
            KeyCode::End => self.scroll_offset = usize::MAX / 2,
            _ => {}
        }
    }
}

impl Default for DialogComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        let dismiss_keys: &[KeyCode] = match dialog_type {
            DialogType::Info(_) | DialogType::Error(_) => &[KeyCode::Enter, KeyCode::Esc, KeyCode::Char('q')],
            DialogType::Help => &[KeyCode::Esc, KeyCode::F(1), KeyCode::Char('q')],
            DialogType::Logs => &[KeyCode::Esc, KeyCode::Char('q')],
        };

        if dismiss_keys.contains(&key.code) {
            return Action::HideDialog;
        }
        self.handle_scroll_key(key);
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.show(dialog_type.clone());
                Action::ShowDialog(dialog_type)
            }
            Action::HideDialog => {
                self.hide();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        // Clamp to what was actually shown
        self.scroll_offset = match dialog_type {
            DialogType::Info(message) => {
                system_dialogs::render_info_dialog(f, rect, &message, self.scroll_offset, &mut self.scrollbar_state)
            }
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, &message, self.scroll_offset, &mut self.scrollbar_state)
            }
            DialogType::Help => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state)
            }
            DialogType::Logs => system_dialogs::render_logs_dialog(
                f,
                rect,
                &self.logger,
                self.scroll_offset,
                &mut self.scrollbar_state,
            ),
        };
    }
}

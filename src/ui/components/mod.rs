//! Reusable UI components

// Screen sections
pub mod commands_panel;
pub mod onu_panel;
pub mod search_panel;
pub mod status_bar;

// Component architecture
pub mod dialog_component;
pub mod dialogs;

// Component exports
pub use commands_panel::CommandsPanel;
pub use dialog_component::DialogComponent;
pub use onu_panel::OnuPanel;
pub use search_panel::SearchPanel;
pub use status_bar::StatusBar;

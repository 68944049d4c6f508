//! Core UI functionality for noc-console.
//!
//! - [`actions`] - Action definitions and dialog types
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal input polling
//! - [`task_manager`] - Background request execution
//!
//! Key presses become [`Action`]s; actions that need the backend are run by the
//! [`TaskManager`] and come back as result actions on the next tick.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};

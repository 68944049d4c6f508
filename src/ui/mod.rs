//! Terminal user interface for noc-console
//!
//! - [`example`] - Screen state and request handlers
//! - [`app_component`] - Root component wiring keys, requests and dialogs
//! - [`components`] - Screen sections and dialogs
//! - [`core`] - Actions, events and background tasks
//! - [`layout`] - Layout calculations
//! - [`renderer`] - Terminal setup and the event loop

pub mod app_component;
pub mod components;
pub mod core;
pub mod example;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use example::{ApiExample, ExampleState, RawCallOutcome};
pub use layout::LayoutManager;
pub use renderer::run_app;

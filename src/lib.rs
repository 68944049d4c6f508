//! noc-console - A Terminal User Interface (TUI) for the NOC backend API
//!
//! This library provides a terminal screen for exercising the network
//! operations backend: searching customers and their invoices, looking up
//! ONU telemetry, creating tickets, and calling the raw CLI endpoints. It
//! includes typed service clients, a reducer-style screen state, and an
//! interactive UI built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - HTTP service clients and the response envelope
//! * [`config`] - Application configuration management
//! * [`models`] - Request and response payloads
//! * [`ui`] - Terminal user interface components

/// Backend service clients and their trait seams
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging backend and the in-memory log buffer
pub mod logger;

/// Wire models shared by the services and the UI
pub mod models;

/// Terminal user interface components and rendering
pub mod ui;

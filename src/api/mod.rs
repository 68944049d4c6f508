//! Backend API layer.
//!
//! This module defines the service seams the UI talks to, the common result
//! envelope returned by the backend wrappers, and the structured error type
//! shared by every call.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{CustomerRecord, OnuDetails, OnuTarget, RunningTerminals, TicketOperationResponse, TicketRequest};

pub mod cli;
pub mod client;
pub mod customer;
pub mod factory;
pub mod onu;
pub mod ticket;

pub use cli::CliService;
pub use client::ApiClient;
pub use customer::CustomerService;
pub use factory::create_services;
pub use onu::OnuService;
pub use ticket::TicketService;

/// Errors raised while talking to the backend.
///
/// A request that reached the backend and came back with a non-success status
/// is a [`ApiError::Status`]; everything else failed before a usable response
/// existed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid data: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Human-readable message without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport(msg) | ApiError::Decode(msg) | ApiError::InvalidUrl(msg) => msg,
            ApiError::Status { message, .. } => message,
        }
    }

    /// HTTP status code, only present when the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ApiError::Decode(err.to_string());
        }
        match err.status() {
            Some(status) => ApiError::Status {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None => ApiError::Transport(err.to_string()),
        }
    }
}

/// Result envelope returned by the typed service wrappers.
///
/// Exactly one of `data` or `error` is normally set. A response with neither is
/// a success with no payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ServiceResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
        }
    }

    pub fn empty() -> Self {
        Self { data: None, error: None }
    }
}

impl<T> Default for ServiceResponse<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Customer lookups against the billing system.
#[async_trait]
pub trait CustomerApi: Send + Sync {
    /// Search customers and attach their invoice summaries.
    async fn get_invoices(&self, query: &str) -> Result<ServiceResponse<Vec<CustomerRecord>>, ApiError>;
}

/// ONU telemetry lookups, executed by the backend over the OLT session.
#[async_trait]
pub trait OnuApi: Send + Sync {
    async fn get_customer_details(&self, target: &OnuTarget) -> Result<ServiceResponse<OnuDetails>, ApiError>;
}

/// Ticket creation in the helpdesk system.
#[async_trait]
pub trait TicketApi: Send + Sync {
    /// Create a ticket without asking the NOC to process it.
    async fn create_only(&self, request: &TicketRequest) -> Result<ServiceResponse<TicketOperationResponse>, ApiError>;
}

/// Raw terminal-session endpoints. No result envelope: failures surface as [`ApiError`].
#[async_trait]
pub trait CliApi: Send + Sync {
    async fn list_running_terminals(&self) -> Result<RunningTerminals, ApiError>;
}

/// The set of collaborators the example screen dispatches to.
#[derive(Clone)]
pub struct Services {
    pub customers: Arc<dyn CustomerApi>,
    pub onu: Arc<dyn OnuApi>,
    pub tickets: Arc<dyn TicketApi>,
    pub cli: Arc<dyn CliApi>,
}

impl Services {
    pub fn new(
        customers: Arc<dyn CustomerApi>,
        onu: Arc<dyn OnuApi>,
        tickets: Arc<dyn TicketApi>,
        cli: Arc<dyn CliApi>,
    ) -> Self {
        Self {
            customers,
            onu,
            tickets,
            cli,
        }
    }
}

//! Builds the service set from configuration.

use std::sync::Arc;

use anyhow::{Context, Result};

use super::{ApiClient, CliService, CustomerService, OnuService, Services, TicketService};
use crate::config::ApiConfig;

/// Create the HTTP-backed services, all sharing one connection pool.
///
/// # Errors
/// Returns error if the base URL is invalid or the HTTP client cannot be built.
pub fn create_services(config: &ApiConfig) -> Result<Services> {
    let client = ApiClient::from_config(config)
        .with_context(|| format!("Failed to create API client for {}", config.base_url))?;
    log::info!("Using backend at {}", client.base_url());

    Ok(Services::new(
        Arc::new(CustomerService::new(client.clone())),
        Arc::new(OnuService::new(client.clone())),
        Arc::new(TicketService::new(client.clone())),
        Arc::new(CliService::new(client)),
    ))
}

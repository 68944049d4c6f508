//! Customer and billing lookups.

use async_trait::async_trait;

use super::{ApiClient, ApiError, CustomerApi, ServiceResponse};
use crate::models::{CustomerRecord, PsbRecord};

/// Wrapper for the `/customer` routes.
#[derive(Clone, Debug)]
pub struct CustomerService {
    client: ApiClient,
}

impl CustomerService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List customers waiting for a new installation.
    pub async fn get_psb(&self) -> Result<ServiceResponse<Vec<PsbRecord>>, ApiError> {
        self.client.get_envelope("customer/psb", &[]).await
    }
}

#[async_trait]
impl CustomerApi for CustomerService {
    async fn get_invoices(&self, query: &str) -> Result<ServiceResponse<Vec<CustomerRecord>>, ApiError> {
        let response: ServiceResponse<Vec<CustomerRecord>> =
            self.client.get_envelope("customer/invoices", &[("query", query)]).await?;
        if let Some(customers) = &response.data {
            log::info!("CustomerService: {} customers for '{}'", customers.len(), query);
        }
        Ok(response)
    }
}

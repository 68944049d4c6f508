//! Helpdesk ticket operations.

use async_trait::async_trait;
use serde::Serialize;

use super::{ApiClient, ApiError, ServiceResponse, TicketApi};
use crate::models::{TicketOperationResponse, TicketRequest, TicketSearchResponse};

/// Body of `POST /ticket/`. The same route can also hand the ticket to the NOC
/// queue; this client only ever creates.
#[derive(Serialize)]
struct OpenTicketBody<'a> {
    #[serde(flatten)]
    request: &'a TicketRequest,
    process_immediately: bool,
}

/// Wrapper for the `/ticket` routes.
#[derive(Clone, Debug)]
pub struct TicketService {
    client: ApiClient,
}

impl TicketService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Look up open tickets for a customer.
    pub async fn search(&self, query: &str) -> Result<ServiceResponse<TicketSearchResponse>, ApiError> {
        self.client.get_envelope("ticket/search", &[("query", query)]).await
    }
}

#[async_trait]
impl TicketApi for TicketService {
    async fn create_only(&self, request: &TicketRequest) -> Result<ServiceResponse<TicketOperationResponse>, ApiError> {
        let body = OpenTicketBody {
            request,
            process_immediately: false,
        };
        log::info!(
            "TicketService: creating {} ticket for '{}'",
            request.priority.as_str(),
            request.query
        );
        self.client.post_envelope("ticket/", &body).await
    }
}

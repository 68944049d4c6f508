//! Terminal session endpoints.

use async_trait::async_trait;

use super::{ApiClient, ApiError, CliApi};
use crate::models::RunningTerminals;

/// Wrapper for the `/cli` routes. Unlike the other services it does not fold
/// backend errors into a result envelope.
#[derive(Clone, Debug)]
pub struct CliService {
    client: ApiClient,
}

impl CliService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CliApi for CliService {
    async fn list_running_terminals(&self) -> Result<RunningTerminals, ApiError> {
        self.client.get_json("cli/running_terminals", &[]).await
    }
}

//! ONU telemetry lookups.
//!
//! The backend resolves the OLT name to its connection details and runs the
//! show commands over its own telnet session; the client only sends targets.

use async_trait::async_trait;

use super::{ApiClient, ApiError, OnuApi, ServiceResponse};
use crate::models::{OnuDetails, OnuRxReport, OnuStateReport, OnuTarget, PortTarget};

/// Wrapper for the `/onu` routes.
#[derive(Clone, Debug)]
pub struct OnuService {
    client: ApiClient,
}

impl OnuService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Raw `show gpon onu state` output for a PON port.
    pub async fn get_onu_state(&self, target: &PortTarget) -> Result<ServiceResponse<OnuStateReport>, ApiError> {
        self.client.post_envelope("onu/onu-state", target).await
    }

    /// Raw receive power readings for a PON port.
    pub async fn get_onu_rx(&self, target: &PortTarget) -> Result<ServiceResponse<OnuRxReport>, ApiError> {
        self.client.post_envelope("onu/onu-rx", target).await
    }
}

#[async_trait]
impl OnuApi for OnuService {
    async fn get_customer_details(&self, target: &OnuTarget) -> Result<ServiceResponse<OnuDetails>, ApiError> {
        log::info!("OnuService: detail search on {} {}", target.olt_name, target.interface);
        self.client.post_envelope("onu/detail-search", target).await
    }
}

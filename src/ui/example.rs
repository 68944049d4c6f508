//! The API example screen's view-state and request handlers.
//!
//! Each handler follows the same shape: clear the error, raise the loading
//! flag, await one service call, then apply the outcome. A result-level error
//! is shown verbatim; a failed round trip is replaced by a fixed message for
//! that operation and the detail only reaches the log.
//!
//! The handlers come in two forms sharing the same reducer steps. The `async`
//! methods on [`ApiExample`] run a whole request inline. The TUI instead calls
//! the `begin_*` step, runs the service call as a background task, and feeds
//! the result back through the matching `finish_*` step.

use crate::api::{ApiError, CliApi, ServiceResponse, Services};
use crate::constants::{ERROR_CREATE_TICKET, ERROR_FETCH_CUSTOMERS, ERROR_FETCH_ONU_DETAILS, SUCCESS_TICKET_CREATED};
use crate::models::{CustomerRecord, OnuDetails, OnuTarget, RunningTerminals, TicketOperationResponse, TicketRequest};
use crate::ui::core::actions::{Action, DialogType};

/// View-state of the example screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExampleState {
    pub search_query: String,
    /// `None` until the first successful search
    pub customers: Option<Vec<CustomerRecord>>,
    pub loading: bool,
    pub error_message: Option<String>,
    pub onu_details: Option<OnuDetails>,
}

impl ExampleState {
    /// Whether the search, ONU and ticket controls accept input.
    pub fn controls_enabled(&self) -> bool {
        !self.loading
    }

    fn begin_request(&mut self) {
        self.loading = true;
        self.error_message = None;
    }

    /// Start a search for the current query.
    ///
    /// Returns the query to send, or `None` (leaving state untouched) when the
    /// query is blank.
    pub fn begin_search(&mut self) -> Option<String> {
        if self.search_query.trim().is_empty() {
            return None;
        }
        self.begin_request();
        Some(self.search_query.clone())
    }

    pub fn finish_search(&mut self, outcome: Result<ServiceResponse<Vec<CustomerRecord>>, ApiError>) {
        match outcome {
            Ok(response) => match response.error {
                Some(error) => self.error_message = Some(error),
                None => self.customers = Some(response.data.unwrap_or_default()),
            },
            Err(e) => {
                log::warn!("Customer search failed: {}", e);
                self.error_message = Some(ERROR_FETCH_CUSTOMERS.to_string());
            }
        }
        self.loading = false;
    }

    pub fn begin_onu_lookup(&mut self) {
        self.begin_request();
    }

    pub fn finish_onu_lookup(&mut self, outcome: Result<ServiceResponse<OnuDetails>, ApiError>) {
        match outcome {
            Ok(response) => match response.error {
                Some(error) => self.error_message = Some(error),
                None => self.onu_details = response.data,
            },
            Err(e) => {
                log::warn!("ONU lookup failed: {}", e);
                self.error_message = Some(ERROR_FETCH_ONU_DETAILS.to_string());
            }
        }
        self.loading = false;
    }

    pub fn begin_ticket(&mut self) {
        self.begin_request();
    }

    /// Apply a ticket creation result. Returns `true` when the ticket was
    /// created and the user should be told so.
    pub fn finish_ticket(&mut self, outcome: Result<ServiceResponse<TicketOperationResponse>, ApiError>) -> bool {
        let created = match outcome {
            Ok(response) => match response.error {
                Some(error) => {
                    self.error_message = Some(error);
                    false
                }
                None => {
                    if let Some(result) = response.data {
                        log::info!("Ticket created: {}", result.message);
                    }
                    true
                }
            },
            Err(e) => {
                log::warn!("Ticket creation failed: {}", e);
                self.error_message = Some(ERROR_CREATE_TICKET.to_string());
                false
            }
        };
        self.loading = false;
        created
    }

    /// Rendered result rows, `None` before any successful search.
    pub fn result_lines(&self) -> Option<Vec<String>> {
        self.customers
            .as_ref()
            .map(|customers| customers.iter().map(CustomerRecord::display_line).collect())
    }
}

/// Outcome of the raw terminal listing call.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCallOutcome {
    Terminals(RunningTerminals),
    /// The backend answered with an error status
    ApiError { message: String, status: u16 },
    /// The call failed without a backend answer
    Unknown(String),
}

/// Call the terminal listing endpoint directly and log what came back.
///
/// Touches no view-state.
pub async fn raw_invoke(cli: &dyn CliApi) -> RawCallOutcome {
    match cli.list_running_terminals().await {
        Ok(terminals) => {
            log::info!(
                "Running terminals: {} (ports {:?})",
                terminals.count,
                terminals.running_ports
            );
            RawCallOutcome::Terminals(terminals)
        }
        Err(ApiError::Status { status, message }) => {
            log::error!("API Error: {} Status: {}", message, status);
            RawCallOutcome::ApiError { message, status }
        }
        Err(e) => {
            log::error!("Unknown error: {}", e);
            RawCallOutcome::Unknown(e.to_string())
        }
    }
}

/// The example screen: view-state plus the services it dispatches to.
pub struct ApiExample {
    state: ExampleState,
    services: Services,
}

impl ApiExample {
    pub fn new(services: Services) -> Self {
        Self {
            state: ExampleState::default(),
            services,
        }
    }

    pub fn state(&self) -> &ExampleState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ExampleState {
        &mut self.state
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.state.search_query = query.into();
    }

    /// Search customers for `query`. Blank queries are ignored.
    pub async fn search(&mut self, query: &str) {
        self.set_search_query(query);
        let Some(query) = self.state.begin_search() else {
            return;
        };
        let outcome = self.services.customers.get_invoices(&query).await;
        self.state.finish_search(outcome);
    }

    /// Fetch telemetry for one ONU.
    pub async fn lookup_onu(&mut self, olt_name: &str, interface: &str) {
        self.state.begin_onu_lookup();
        let target = OnuTarget::new(olt_name, interface);
        let outcome = self.services.onu.get_customer_details(&target).await;
        self.state.finish_onu_lookup(outcome);
    }

    /// Create a ticket. On success returns the acknowledgment to show.
    pub async fn create_ticket(&mut self, request: &TicketRequest) -> Action {
        self.state.begin_ticket();
        let outcome = self.services.tickets.create_only(request).await;
        if self.state.finish_ticket(outcome) {
            Action::ShowDialog(DialogType::Info(SUCCESS_TICKET_CREATED.to_string()))
        } else {
            Action::None
        }
    }

    pub async fn raw_invoke(&self) -> RawCallOutcome {
        raw_invoke(self.services.cli.as_ref()).await
    }
}

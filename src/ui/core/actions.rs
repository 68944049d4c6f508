use crate::api::{ApiError, ServiceResponse};
use crate::models::{CustomerRecord, OnuDetails, OnuTarget, TicketOperationResponse, TicketRequest};
use crate::ui::example::RawCallOutcome;

#[derive(Debug, Clone)]
pub enum Action {
    // Search input
    QueryInput(char),
    QueryBackspace,
    QueryClear,

    // Requests
    SearchCustomers,
    LookupOnu(OnuTarget),
    CreateTicket(TicketRequest),
    ListTerminals,

    // Background results
    CustomersLoaded(Result<ServiceResponse<Vec<CustomerRecord>>, ApiError>),
    OnuDetailsLoaded(Result<ServiceResponse<OnuDetails>, ApiError>),
    TicketSubmitted(Result<ServiceResponse<TicketOperationResponse>, ApiError>),
    TerminalsListed(RawCallOutcome),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    Error(String),
    Info(String),
    Help,
    Logs,
}

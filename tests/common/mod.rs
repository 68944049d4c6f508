//! In-memory service doubles shared by the integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use noc_console::api::{ApiError, CliApi, CustomerApi, OnuApi, ServiceResponse, Services, TicketApi};
use noc_console::models::{
    CustomerRecord, OnuDetails, OnuTarget, RunningTerminals, TicketOperationResponse, TicketRequest,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// A canned outcome plus a record of every argument the service was called with.
pub struct Mock<Arg, Out> {
    outcome: Mutex<Result<Out, ApiError>>,
    calls: Mutex<Vec<Arg>>,
    delay: Duration,
}

impl<Arg: Clone, Out: Clone> Mock<Arg, Out> {
    pub fn new(outcome: Result<Out, ApiError>) -> Arc<Self> {
        Self::delayed(outcome, Duration::ZERO)
    }

    /// Answer only after `delay`, so tests can observe the in-flight state.
    pub fn delayed(outcome: Result<Out, ApiError>, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            outcome: Mutex::new(outcome),
            calls: Mutex::new(Vec::new()),
            delay,
        })
    }

    pub fn calls(&self) -> Vec<Arg> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn set_outcome(&self, outcome: Result<Out, ApiError>) {
        *self.outcome.lock().unwrap() = outcome;
    }

    async fn answer(&self, arg: Arg) -> Result<Out, ApiError> {
        self.calls.lock().unwrap().push(arg);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.outcome.lock().unwrap().clone()
    }
}

pub type MockCustomers = Mock<String, ServiceResponse<Vec<CustomerRecord>>>;
pub type MockOnu = Mock<OnuTarget, ServiceResponse<OnuDetails>>;
pub type MockTickets = Mock<TicketRequest, ServiceResponse<TicketOperationResponse>>;
pub type MockCli = Mock<(), RunningTerminals>;

#[async_trait]
impl CustomerApi for MockCustomers {
    async fn get_invoices(&self, query: &str) -> Result<ServiceResponse<Vec<CustomerRecord>>, ApiError> {
        self.answer(query.to_string()).await
    }
}

#[async_trait]
impl OnuApi for MockOnu {
    async fn get_customer_details(&self, target: &OnuTarget) -> Result<ServiceResponse<OnuDetails>, ApiError> {
        self.answer(target.clone()).await
    }
}

#[async_trait]
impl TicketApi for MockTickets {
    async fn create_only(&self, request: &TicketRequest) -> Result<ServiceResponse<TicketOperationResponse>, ApiError> {
        self.answer(request.clone()).await
    }
}

#[async_trait]
impl CliApi for MockCli {
    async fn list_running_terminals(&self) -> Result<RunningTerminals, ApiError> {
        self.answer(()).await
    }
}

/// A customer service whose request task dies instead of answering.
pub struct PanickingCustomers;

#[async_trait]
impl CustomerApi for PanickingCustomers {
    async fn get_invoices(&self, query: &str) -> Result<ServiceResponse<Vec<CustomerRecord>>, ApiError> {
        panic!("customer service crashed while searching '{}'", query);
    }
}

/// Every service double, kept so tests can inspect calls after handing
/// `Services` to the code under test.
pub struct Backend {
    pub customers: Arc<MockCustomers>,
    pub onu: Arc<MockOnu>,
    pub tickets: Arc<MockTickets>,
    pub cli: Arc<MockCli>,
}

impl Backend {
    /// Services that all succeed with empty payloads.
    pub fn new() -> Self {
        Self {
            customers: MockCustomers::new(Ok(ServiceResponse::ok(Vec::new()))),
            onu: MockOnu::new(Ok(ServiceResponse::ok(OnuDetails::default()))),
            tickets: MockTickets::new(Ok(ServiceResponse::ok(TicketOperationResponse::default()))),
            cli: MockCli::new(Ok(RunningTerminals::default())),
        }
    }

    pub fn services(&self) -> Services {
        Services::new(
            self.customers.clone(),
            self.onu.clone(),
            self.tickets.clone(),
            self.cli.clone(),
        )
    }
}

pub fn customer(id: &str, name: &str, pppoe: &str) -> CustomerRecord {
    CustomerRecord {
        id: id.to_string(),
        name: Some(name.to_string()),
        user_pppoe: Some(pppoe.to_string()),
        detail_url: None,
        invoices: None,
    }
}

pub fn sample_onu() -> OnuDetails {
    OnuDetails {
        serial_number: Some("ZTEG12345678".to_string()),
        onu_distance: Some("1250".to_string()),
        online_duration: Some("3d 4h".to_string()),
        ip_remote: Some("10.20.30.40".to_string()),
        ..Default::default()
    }
}

pub fn transport_error() -> ApiError {
    ApiError::Transport("connection refused".to_string())
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use noc_console::config::SamplesConfig;
use noc_console::ui::core::EventType;
use noc_console::ui::AppComponent;

pub fn app(backend: &Backend) -> AppComponent {
    AppComponent::new(backend.services(), SamplesConfig::default())
}

pub fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

pub fn ctrl(app: &mut AppComponent, c: char) {
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)));
}

pub fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Feed background results back into the app until no request is left running.
pub async fn settle(app: &mut AppComponent) {
    for _ in 0..400 {
        let busy = app.is_busy();
        tokio::time::sleep(Duration::from_millis(5)).await;
        for action in app.process_background_actions() {
            app.dispatch(action);
        }
        if !busy {
            return;
        }
    }
    panic!("background requests did not finish");
}

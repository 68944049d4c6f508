use crate::api::{ApiError, Services};
use crate::config::SamplesConfig;
use crate::constants::{SUCCESS_TICKET_CREATED, TITLE_APP};
use crate::ui::components::{CommandsPanel, DialogComponent, OnuPanel, SearchPanel, StatusBar};
use crate::ui::core::{
    actions::{Action, DialogType},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::example::{self, ApiExample, ExampleState, RawCallOutcome};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;

pub struct AppComponent {
    example: ApiExample,
    dialog: DialogComponent,
    samples: SamplesConfig,

    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(services: Services, samples: SamplesConfig) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();

        Self {
            example: ApiExample::new(services),
            dialog: DialogComponent::new(),
            samples,
            task_manager,
            background_action_rx,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &ExampleState {
        self.example.state()
    }

    pub fn dialog(&self) -> Option<&DialogType> {
        self.dialog.dialog_type.as_ref()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Check if any background requests are running
    pub fn is_busy(&self) -> bool {
        self.task_manager.task_count() > 0
    }

    /// Handle keys that no dialog consumed
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let enabled = self.example.state().controls_enabled();

        match key.code {
            KeyCode::Char('c') if ctrl => {
                log::debug!("Global key: Ctrl+C - quitting application");
                Action::Quit
            }
            KeyCode::Esc => {
                log::debug!("Global key: Esc - quitting application");
                Action::Quit
            }
            KeyCode::F(1) => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('g') if ctrl => Action::ShowDialog(DialogType::Logs),
            // Always available, even while another request is in flight
            KeyCode::Char('l') if ctrl => Action::ListTerminals,

            // Everything below is disabled while loading
            _ if !enabled => Action::None,

            KeyCode::Char('o') if ctrl => Action::LookupOnu(self.samples.onu_target()),
            KeyCode::Char('t') if ctrl => match self.samples.ticket_request() {
                Ok(request) => Action::CreateTicket(request),
                Err(e) => Action::ShowDialog(DialogType::Error(format!("Invalid sample ticket: {}", e))),
            },
            KeyCode::Char('u') if ctrl => Action::QueryClear,
            KeyCode::Enter => Action::SearchCustomers,
            KeyCode::Backspace => Action::QueryBackspace,
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => Action::QueryInput(c),
            _ => Action::None,
        }
    }

    /// Apply an action to the example state, spawning its request if it has one.
    ///
    /// Returns a follow-up action for the dialog, or [`Action::None`].
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::QueryInput(c) => {
                self.example.state_mut().search_query.push(c);
                Action::None
            }
            Action::QueryBackspace => {
                self.example.state_mut().search_query.pop();
                Action::None
            }
            Action::QueryClear => {
                self.example.state_mut().search_query.clear();
                Action::None
            }
            Action::SearchCustomers => {
                if let Some(query) = self.example.state_mut().begin_search() {
                    log::info!("Searching customers for '{}'", query);
                    let customers = self.example.services().customers.clone();
                    self.task_manager.spawn_request(
                        format!("Search '{}'", query),
                        async move { Action::CustomersLoaded(customers.get_invoices(&query).await) },
                        |e| Action::CustomersLoaded(Err(ApiError::Transport(e))),
                    );
                }
                Action::None
            }
            Action::LookupOnu(target) => {
                log::info!("Looking up ONU {} {}", target.olt_name, target.interface);
                self.example.state_mut().begin_onu_lookup();
                let onu = self.example.services().onu.clone();
                self.task_manager.spawn_request(
                    "ONU lookup",
                    async move { Action::OnuDetailsLoaded(onu.get_customer_details(&target).await) },
                    |e| Action::OnuDetailsLoaded(Err(ApiError::Transport(e))),
                );
                Action::None
            }
            Action::CreateTicket(request) => {
                log::info!("Creating ticket '{}' ({})", request.query, request.priority);
                self.example.state_mut().begin_ticket();
                let tickets = self.example.services().tickets.clone();
                self.task_manager.spawn_request(
                    "Create ticket",
                    async move { Action::TicketSubmitted(tickets.create_only(&request).await) },
                    |e| Action::TicketSubmitted(Err(ApiError::Transport(e))),
                );
                Action::None
            }
            Action::ListTerminals => {
                let cli = self.example.services().cli.clone();
                self.task_manager.spawn_request(
                    "List running terminals",
                    async move { Action::TerminalsListed(example::raw_invoke(cli.as_ref()).await) },
                    |e| Action::TerminalsListed(RawCallOutcome::Unknown(e)),
                );
                Action::None
            }
            Action::CustomersLoaded(outcome) => {
                self.example.state_mut().finish_search(outcome);
                Action::None
            }
            Action::OnuDetailsLoaded(outcome) => {
                self.example.state_mut().finish_onu_lookup(outcome);
                Action::None
            }
            Action::TicketSubmitted(outcome) => {
                if self.example.state_mut().finish_ticket(outcome) {
                    Action::ShowDialog(DialogType::Info(SUCCESS_TICKET_CREATED.to_string()))
                } else {
                    Action::None
                }
            }
            Action::TerminalsListed(outcome) => {
                log::debug!("Raw call finished: {:?}", outcome);
                Action::None
            }
            Action::ShowDialog(ref dialog_type) => {
                log::debug!("Dialog: showing {:?}", dialog_type);
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Run an action through the dialog and the app until nothing is left to do.
    pub fn dispatch(&mut self, mut action: Action) {
        while !matches!(action, Action::None) {
            let action_after_dialog = self.dialog.update(action);
            action = self.handle_app_action(action_after_dialog);
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        if !completed_tasks.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", completed_tasks.len());
        }

        actions
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else {
                    self.handle_global_key(key)
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action);
    }

    fn render_title(f: &mut Frame, rect: Rect) {
        let title = Paragraph::new(TITLE_APP)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        f.render_widget(title, rect);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Dialog routing lives in handle_event
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        self.handle_app_action(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::screen_layout(rect);
        let state = self.example.state();

        Self::render_title(f, areas.title);
        SearchPanel::render(f, areas.search, state);
        OnuPanel::render(
            f,
            areas.onu,
            state.onu_details.as_ref(),
            &format!("{} {}", self.samples.olt_name, self.samples.interface),
        );
        CommandsPanel::render(
            f,
            areas.commands,
            state.controls_enabled(),
            &format!("{} ({})", self.samples.ticket_query, self.samples.ticket_priority),
        );
        StatusBar::render(f, areas.status, state);

        // Dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}

//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Backend defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001/api/v1";
pub const DEFAULT_TOKEN_ENV: &str = "NOC_API_TOKEN";
/// Upper bound for any configured HTTP timeout
pub const MAX_TIMEOUT_SECS: u64 = 300;

// Fallback messages shown when a request fails before the backend answers.
// The underlying error only goes to the debug log.
pub const ERROR_FETCH_CUSTOMERS: &str = "Failed to fetch customer data";
pub const ERROR_FETCH_ONU_DETAILS: &str = "Failed to fetch ONU details";
pub const ERROR_CREATE_TICKET: &str = "Failed to create ticket";

// Success Messages
pub const SUCCESS_TICKET_CREATED: &str = "Ticket created successfully!";

// Section headers
pub const TITLE_APP: &str = "API Service Example";
pub const HEADER_CUSTOMER_SEARCH: &str = "Customer Search";
pub const HEADER_RESULTS: &str = "Results:";
pub const HEADER_ONU_DETAILS: &str = "ONU Details";
pub const HEADER_ONU_INFORMATION: &str = "ONU Information:";
pub const HEADER_CREATE_TICKET: &str = "Create Ticket";
pub const HEADER_DIRECT_CALL: &str = "Direct API Call";

// UI Messages
pub const NO_CUSTOMERS_FOUND: &str = "No customers found";
pub const SEARCH_PLACEHOLDER: &str = "Enter customer query...";
pub const STATUS_SEARCHING: &str = "Searching...";
pub const STATUS_IDLE: &str = "Enter: search • ^O: sample ONU • ^T: sample ticket • ^L: list terminals • ^G: logs • F1: help • Esc: quit";
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc' or 'q' to close";

// UI Layout Constants
/// Lines reserved for the search section (input, error line, results)
pub const SEARCH_SECTION_MIN_HEIGHT: u16 = 8;
/// Lines used by the ONU details panel
pub const ONU_SECTION_HEIGHT: u16 = 7;
/// Maximum in-memory log entries kept for the logs dialog
pub const MAX_LOG_ENTRIES: usize = 1000;

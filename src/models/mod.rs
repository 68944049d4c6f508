//! Request and response shapes exchanged with the NOC backend.
//!
//! Field names follow the backend's JSON. Numeric-or-string fields are
//! normalized to strings when decoded.

pub mod cli;
pub mod customer;
pub mod onu;
pub mod ticket;

pub use cli::RunningTerminals;
pub use customer::{BillingSummary, CustomerRecord, PsbRecord};
pub use onu::{EthPortStatus, OnuDetails, OnuRxReport, OnuStateReport, OnuTarget, PortTarget};
pub use ticket::{TicketCategory, TicketOperationResponse, TicketPriority, TicketRequest, TicketSearchResponse};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn scalar_to_string<E: serde::de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(E::custom(format!("expected a string or number, got {}", other))),
    }
}

/// Accept a JSON string or number for a required string field.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value)?.ok_or_else(|| serde::de::Error::custom("expected a string or number, got null"))
}

/// Accept a JSON string, number or null for an optional string field.
pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    scalar_to_string(value)
}

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ticket urgency as the helpdesk form knows it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketPriority {
    #[default]
    Low,
    Medium,
    High,
}

impl TicketPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketPriority::Low => "LOW",
            TicketPriority::Medium => "MEDIUM",
            TicketPriority::High => "HIGH",
        }
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(TicketPriority::Low),
            "MEDIUM" => Ok(TicketPriority::Medium),
            "HIGH" => Ok(TicketPriority::High),
            other => Err(format!("unknown ticket priority '{}'", other)),
        }
    }
}

/// Ticket category (`jenis` on the wire).
///
/// `FREE` is the only category the backend defaults to; other helpdesk
/// categories are passed through unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TicketCategory {
    #[default]
    Free,
    Other(String),
}

impl TicketCategory {
    pub fn as_str(&self) -> &str {
        match self {
            TicketCategory::Free => "FREE",
            TicketCategory::Other(name) => name,
        }
    }
}

impl From<String> for TicketCategory {
    fn from(value: String) -> Self {
        let normalized = value.trim().to_ascii_uppercase();
        if normalized == "FREE" {
            TicketCategory::Free
        } else {
            TicketCategory::Other(normalized)
        }
    }
}

impl From<TicketCategory> for String {
    fn from(value: TicketCategory) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for creating a helpdesk ticket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRequest {
    /// Customer lookup text (PPPoE user or name)
    pub query: String,
    pub description: String,
    #[serde(default)]
    pub priority: TicketPriority,
    #[serde(default, rename = "jenis")]
    pub category: TicketCategory,
}

impl TicketRequest {
    pub fn new(query: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            description: description.into(),
            priority: TicketPriority::default(),
            category: TicketCategory::default(),
        }
    }

    pub fn with_priority(mut self, priority: TicketPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category: TicketCategory) -> Self {
        self.category = category;
        self
    }
}

/// Outcome of a ticket action as reported by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketOperationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub creation_result: Option<String>,
    #[serde(default)]
    pub processing_result: Option<String>,
}

/// Ticket search rows are free-form columns scraped from the helpdesk table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketSearchResponse {
    pub query: String,
    #[serde(default)]
    pub results: Vec<serde_json::Map<String, serde_json::Value>>,
}

use serde::{Deserialize, Serialize};

/// Billing status attached to a customer search result.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingSummary {
    #[serde(default)]
    pub this_month: Option<String>,
    #[serde(default)]
    pub arrears_count: u32,
    #[serde(default)]
    pub last_paid_month: Option<String>,
}

/// One customer row from the billing search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(deserialize_with = "super::string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_pppoe: Option<String>,
    #[serde(default)]
    pub detail_url: Option<String>,
    #[serde(default)]
    pub invoices: Option<Vec<BillingSummary>>,
}

impl CustomerRecord {
    /// `<name> - <pppoe user>`, the way a result row is listed.
    pub fn display_line(&self) -> String {
        format!(
            "{} - {}",
            self.name.as_deref().unwrap_or_default(),
            self.user_pppoe.as_deref().unwrap_or_default()
        )
    }

    pub fn invoices(&self) -> &[BillingSummary] {
        self.invoices.as_deref().unwrap_or_default()
    }
}

/// A new-installation record from the NMS.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PsbRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub user_pppoe: Option<String>,
    #[serde(default)]
    pub pppoe_password: Option<String>,
    #[serde(default, rename = "paket")]
    pub package: Option<String>,
}

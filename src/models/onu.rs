use serde::{Deserialize, Serialize};

/// Identifies one ONU: the OLT by configured name plus the full interface
/// string (`1/2/3:4`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnuTarget {
    pub olt_name: String,
    pub interface: String,
}

impl OnuTarget {
    pub fn new(olt_name: impl Into<String>, interface: impl Into<String>) -> Self {
        Self {
            olt_name: olt_name.into(),
            interface: interface.into(),
        }
    }
}

/// Identifies a PON port on an OLT (`1/2/3`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortTarget {
    pub olt_name: String,
    pub olt_port: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthPortStatus {
    pub interface: String,
    pub is_unlocked: bool,
}

/// Telemetry snapshot for one ONU.
///
/// Every field is optional: the backend fills what it could parse from the
/// OLT output and leaves the rest out.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OnuDetails {
    #[serde(default, rename = "type")]
    pub onu_type: Option<String>,
    #[serde(default)]
    pub phase_state: Option<String>,
    #[serde(default)]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "super::opt_string_or_number")]
    pub onu_distance: Option<String>,
    #[serde(default)]
    pub online_duration: Option<String>,
    #[serde(default)]
    pub modem_logs: Option<String>,
    /// Optical attenuation reading
    #[serde(default, rename = "redaman")]
    pub attenuation: Option<String>,
    #[serde(default)]
    pub ip_remote: Option<String>,
    #[serde(default)]
    pub eth_port: Vec<EthPortStatus>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnuStateReport {
    pub onu_state_data: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnuRxReport {
    pub onu_rx_data: String,
}

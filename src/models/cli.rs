use serde::{Deserialize, Serialize};

/// Terminal sessions the backend currently has running.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningTerminals {
    pub count: usize,
    #[serde(default)]
    pub running_ports: Vec<u16>,
}

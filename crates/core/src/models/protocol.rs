use serde::{Deserialize, Serialize};

/// Value locked in a single protocol of the ecosystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolEntry {
    pub name: String,
    pub locked_value_usd: f64,
}

impl ProtocolEntry {
    pub fn new(name: impl Into<String>, locked_value_usd: f64) -> Self {
        Self {
            name: name.into(),
            locked_value_usd,
        }
    }
}

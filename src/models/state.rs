use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Persisted per-flight state, keyed by the flight label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedState {
    pub price: Option<i64>,
    #[serde(default)]
    pub hurry_alert_sent: bool,
}

impl TrackedState {
    pub fn new(price: i64) -> Self {
        Self {
            price: Some(price),
            hurry_alert_sent: false,
        }
    }
}

pub type StateMap = BTreeMap<String, TrackedState>;

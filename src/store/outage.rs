use crate::errors::AppResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
struct OutageRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_error_date: Option<String>,
}

/// Limits failure notifications to one per calendar day.
pub struct OutageTracker {
    path: PathBuf,
}

impl OutageTracker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> AppResult<OutageRecord> {
        if !self.path.exists() {
            return Ok(OutageRecord::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// True unless a failure was already notified on `today`.
    pub fn should_notify(&self, today: NaiveDate) -> AppResult<bool> {
        let record = self.read()?;
        let today = today.format("%Y-%m-%d").to_string();
        Ok(record.last_error_date.as_deref() != Some(today.as_str()))
    }

    pub fn record(&self, today: NaiveDate) -> AppResult<()> {
        let record = OutageRecord {
            last_error_date: Some(today.format("%Y-%m-%d").to_string()),
        };
        let json = serde_json::to_vec(&record)?;
        super::write_atomic(&self.path, &json)
    }
}

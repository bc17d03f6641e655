//! File layout of the data directory.

use std::path::{Path, PathBuf};

pub const HISTORY_FILE: &str = "previous_flights.json";
pub const OUTAGE_FILE: &str = "api_error_log.json";
pub const ERROR_LOG_FILE: &str = "error_log.txt";
pub const LAST_RUN_FILE: &str = "last_run.txt";
pub const PRICE_LOG_FILE: &str = "flight_prices_log.csv";
pub const PLOTS_DIR: &str = "plots";
pub const REPORT_FILE: &str = "flight_price_trends_report.html";

#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn history(&self) -> PathBuf {
        self.root.join(HISTORY_FILE)
    }

    pub fn outage(&self) -> PathBuf {
        self.root.join(OUTAGE_FILE)
    }

    pub fn error_log(&self) -> PathBuf {
        self.root.join(ERROR_LOG_FILE)
    }

    pub fn last_run(&self) -> PathBuf {
        self.root.join(LAST_RUN_FILE)
    }

    pub fn price_log(&self) -> PathBuf {
        self.root.join(PRICE_LOG_FILE)
    }
}

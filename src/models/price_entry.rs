use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const PRICE_LOG_HEADER: [&str; 7] = [
    "log_date",
    "log_time",
    "flight_date",
    "flight_time",
    "departure",
    "destination",
    "price",
];

/// One row of the append-only price log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLogEntry {
    pub log_date: String,
    pub log_time: String,
    pub flight_date: String,
    pub flight_time: String,
    pub departure: String,
    pub destination: String,
    pub price: i64,
}

impl PriceLogEntry {
    pub fn new(
        checked_at: NaiveDateTime,
        flight_date: &str,
        flight_time: &str,
        departure: &str,
        destination: &str,
        price: i64,
    ) -> Self {
        Self {
            log_date: checked_at.format("%Y-%m-%d").to_string(),
            log_time: checked_at.format("%H:%M:%S").to_string(),
            flight_date: flight_date.to_string(),
            flight_time: flight_time.to_string(),
            departure: departure.to_string(),
            destination: destination.to_string(),
            price,
        }
    }
}

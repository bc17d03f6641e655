use chrono::{NaiveDate, NaiveDateTime};

/// Date format used by the flight labels on the results page.
pub const FLIGHT_DATE_FMT: &str = "%d-%m-%Y";
pub const FLIGHT_DATETIME_FMT: &str = "%d-%m-%Y %H:%M";
pub const LOG_DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Parse the "DD-MM-YYYY" part of a flight label.
pub fn parse_flight_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), FLIGHT_DATE_FMT).ok()
}

/// Parse a flight date and time as written in the price log.
pub fn parse_flight_datetime(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{} {}", date.trim(), time.trim()), FLIGHT_DATETIME_FMT)
        .ok()
}

/// Parse the check timestamp (log_date + log_time) of a price log row.
pub fn parse_log_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{} {}", date.trim(), time.trim()), LOG_DATETIME_FMT)
        .ok()
}

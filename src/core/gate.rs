use crate::utils::date::parse_flight_date;
use chrono::NaiveDate;
use tracing::{info, warn};

/// True if at least one tracked label is dated today or later.
/// Time of day is ignored; malformed labels are skipped.
pub fn has_future_dates<S: AsRef<str>>(tracked: &[S], today: NaiveDate) -> bool {
    info!("Checking future dates...");
    for label in tracked {
        let date_part = label.as_ref().split('·').next().unwrap_or_default().trim();
        match parse_flight_date(date_part) {
            Some(date) if date >= today => {
                info!(%date, "future date found");
                return true;
            }
            Some(_) => {}
            None => warn!("Invalid date format: {date_part}"),
        }
    }
    info!("No future dates to track.");
    false
}

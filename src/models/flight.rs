use serde::Serialize;

/// Separator between the date and the time in a flight label ("DD-MM-YYYY · HH:MM").
pub const LABEL_SEPARATOR: &str = " · ";

/// One flight row parsed from the results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlightRecord {
    pub departure: String,
    /// Combined date+time label, also the identity key of the flight.
    pub date_label: String,
    pub destination: String,
    /// Whole currency units.
    pub price: i64,
    pub link: String,
    /// Present only when seats are running out.
    pub hurry_text: Option<String>,
}

impl FlightRecord {
    pub fn key(&self) -> &str {
        &self.date_label
    }

    /// Split the label into (flight_date, flight_time).
    pub fn date_time(&self) -> Option<(&str, &str)> {
        split_label(&self.date_label)
    }
}

/// Split a "date · time" label on its separator.
pub fn split_label(label: &str) -> Option<(&str, &str)> {
    label.split_once(LABEL_SEPARATOR)
}

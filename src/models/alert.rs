use crate::models::FlightRecord;

/// A notification-worthy change detected for one flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertEvent {
    /// Seats are running out; sent once per flight key.
    Hurry(FlightRecord),
    /// A tracked flight is at or under the threshold and cheaper than before.
    PriceDrop(FlightRecord),
}

impl AlertEvent {
    pub fn flight(&self) -> &FlightRecord {
        match self {
            AlertEvent::Hurry(f) | AlertEvent::PriceDrop(f) => f,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            AlertEvent::Hurry(_) => "hurry",
            AlertEvent::PriceDrop(_) => "price_drop",
        }
    }

    /// Plain-text block for the alert email body.
    pub fn render(&self, currency: &str) -> String {
        match self {
            AlertEvent::PriceDrop(f) => format!(
                "Price Drop Alert:\n\
                 Flight Date: {}\n\
                 New Price: {} {currency}\n\
                 Destination: {}\n\
                 Booking Link: {}\n\
                 ----------------------------------------\n",
                f.date_label, f.price, f.destination, f.link
            ),
            AlertEvent::Hurry(f) => format!(
                "Hurry Alert:\n\
                 Limited Seats for Flight on {}\n\
                 Seats Left: {}\n\
                 Price: {} {currency}\n\
                 Destination: {}\n\
                 Booking Link: {}\n\
                 ----------------------------------------\n",
                f.date_label,
                f.hurry_text.as_deref().unwrap_or_default(),
                f.price,
                f.destination,
                f.link
            ),
        }
    }
}

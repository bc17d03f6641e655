pub mod alert;
pub mod flight;
pub mod price_entry;
pub mod state;

pub use alert::AlertEvent;
pub use flight::FlightRecord;
pub use price_entry::PriceLogEntry;
pub use state::{StateMap, TrackedState};

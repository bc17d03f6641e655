//! State diff and alerting.
//!
//! Pure function of (previous state, snapshot, policy): no file or network
//! access happens here, the monitor persists whatever comes out.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{AlertEvent, FlightRecord, PriceLogEntry, StateMap, TrackedState};
use chrono::NaiveDateTime;
use std::collections::HashSet;

/// Threshold and allow-list that gate price-drop alerts and price logging.
#[derive(Debug, Clone)]
pub struct AlertPolicy {
    tracked: HashSet<String>,
    price_threshold: i64,
}

/// Everything a run produces from one snapshot.
#[derive(Debug, Default)]
pub struct DiffOutcome {
    /// Replaces the stored map wholesale.
    pub state: StateMap,
    /// Snapshot order; hurry before price drop for the same flight.
    pub alerts: Vec<AlertEvent>,
    pub log_entries: Vec<PriceLogEntry>,
}

impl AlertPolicy {
    pub fn new<I, S>(tracked: I, price_threshold: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tracked: tracked.into_iter().map(Into::into).collect(),
            price_threshold,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.dates_to_track.iter().cloned(), cfg.price_threshold)
    }

    pub fn is_tracked(&self, key: &str) -> bool {
        self.tracked.contains(key)
    }

    /// Compare `flights` against `previous` and compute the next state.
    pub fn diff(
        &self,
        previous: &StateMap,
        flights: &[FlightRecord],
        checked_at: NaiveDateTime,
    ) -> AppResult<DiffOutcome> {
        let mut out = DiffOutcome::default();

        for flight in flights {
            let key = flight.key();
            let tracked = self.is_tracked(key);

            if tracked {
                let (flight_date, flight_time) = flight
                    .date_time()
                    .ok_or_else(|| AppError::InvalidLabel(flight.date_label.clone()))?;
                out.log_entries.push(PriceLogEntry::new(
                    checked_at,
                    flight_date,
                    flight_time,
                    &flight.departure,
                    &flight.destination,
                    flight.price,
                ));
            }

            // Current price is always written first; the gated branch below
            // writes it again.
            let mut next = TrackedState::new(flight.price);

            let prior = previous.get(key).cloned().unwrap_or_default();

            if flight.hurry_text.is_some() && !prior.hurry_alert_sent {
                out.alerts.push(AlertEvent::Hurry(flight.clone()));
                next.hurry_alert_sent = true;
            } else {
                next.hurry_alert_sent = prior.hurry_alert_sent;
            }

            if tracked && flight.price <= self.price_threshold {
                next.price = Some(flight.price);

                let improved = match prior.price {
                    None => true,
                    Some(p) => flight.price < p,
                };
                if improved {
                    out.alerts.push(AlertEvent::PriceDrop(flight.clone()));
                }
            }

            out.state.insert(key.to_string(), next);
        }

        Ok(out)
    }
}

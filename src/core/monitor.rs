//! One monitoring run: gate → fetch → parse → diff → log → notify → persist.

use crate::config::{Config, DataPaths};
use crate::core::engine::AlertPolicy;
use crate::core::gate::has_future_dates;
use crate::errors::AppResult;
use crate::models::AlertEvent;
use crate::net::notifier::{ALERT_SUBJECT, ERROR_SUBJECT, alert_body, error_body};
use crate::net::{Notifier, PageSource, parse_flights};
use crate::store::{HistoryStore, OutageTracker, PriceLog, run_log};
use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use std::time::Duration;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every tracked date is in the past; nothing was fetched.
    NoFutureDates,
    /// The page could not be fetched; nothing was written but the outage marker.
    FetchFailed,
    Completed { flights: usize, alerts: usize },
}

pub struct Monitor<'a, S, N> {
    cfg: &'a Config,
    paths: DataPaths,
    source: S,
    notifier: N,
}

impl<'a, S: PageSource, N: Notifier> Monitor<'a, S, N> {
    pub fn new(cfg: &'a Config, paths: DataPaths, source: S, notifier: N) -> Self {
        Self {
            cfg,
            paths,
            source,
            notifier,
        }
    }

    pub fn run(&self, now: NaiveDateTime) -> AppResult<RunOutcome> {
        if !has_future_dates(&self.cfg.dates_to_track, now.date()) {
            info!("No future dates available for tracking. Exiting.");
            return Ok(RunOutcome::NoFutureDates);
        }

        let html = match self.source.fetch() {
            Ok(html) => html,
            Err(e) => {
                warn!("No HTML content fetched: {e}");
                self.report_outage(&e.to_string(), now.date())?;
                return Ok(RunOutcome::FetchFailed);
            }
        };
        run_log::write_last_run(&self.paths.last_run(), now)?;

        let flights = parse_flights(&html)?;
        let history = HistoryStore::new(self.paths.history());
        let previous = history.load()?;

        let outcome = AlertPolicy::from_config(self.cfg).diff(&previous, &flights, now)?;

        PriceLog::new(self.paths.price_log()).append_all(&outcome.log_entries)?;
        self.send_alerts(&outcome.alerts);
        history.save(&outcome.state)?;

        Ok(RunOutcome::Completed {
            flights: flights.len(),
            alerts: outcome.alerts.len(),
        })
    }

    /// Like `run`, but any error is also appended to the general error log.
    pub fn run_logged(&self, now: NaiveDateTime) -> AppResult<RunOutcome> {
        self.run(now).inspect_err(|e| {
            let message = format!("Unexpected error in check: {e}");
            error!("{message}");
            if let Err(log_err) = run_log::append_error(&self.paths.error_log(), now, &message) {
                error!("failed to write error log: {log_err}");
            }
        })
    }

    /// Delivery failures are logged and never abort the run.
    fn send_alerts(&self, alerts: &[AlertEvent]) {
        if alerts.is_empty() {
            info!("No alerts to send.");
            return;
        }

        info!("Preparing to send {} alerts via email.", alerts.len());
        let body = alert_body(alerts, &self.cfg.currency);
        match self
            .notifier
            .send(&self.cfg.email_receivers, ALERT_SUBJECT, &body)
        {
            Ok(()) => info!("Email sent with all alerts."),
            Err(e) => error!("Failed to send email: {e}"),
        }
    }

    /// At most one error email per calendar day.
    fn report_outage(&self, error_message: &str, today: NaiveDate) -> AppResult<()> {
        let tracker = OutageTracker::new(self.paths.outage());
        if !tracker.should_notify(today)? {
            info!("outage already notified today");
            return Ok(());
        }

        match self.notifier.send(
            &self.cfg.email_receivers,
            ERROR_SUBJECT,
            &error_body(error_message),
        ) {
            Ok(()) => info!("Error email sent."),
            Err(e) => eprintln!("Failed to send error email: {e}"),
        }
        tracker.record(today)
    }
}

/// Random delay applied before a run outside the dev environment.
pub fn startup_delay(cfg: &Config) -> Option<Duration> {
    if cfg.is_dev() {
        return None;
    }
    let secs = rand::thread_rng()
        .gen_range(cfg.startup_delay_min_secs as f64..=cfg.startup_delay_max_secs as f64);
    Some(Duration::from_secs_f64(secs))
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::monitor::{Monitor, RunOutcome, startup_delay};
use crate::errors::{AppError, AppResult};
use crate::net::{HttpSource, SmtpNotifier};
use crate::store::run_log;
use crate::ui::messages::{error, info, success, warning};
use crate::utils::date::now;
use std::thread;

/// Handle the `check` command
///
/// Failures are written to the general error log and, unless `--strict`
/// is given, do not change the exit status.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Check { no_delay, strict } = cmd else {
        return Ok(());
    };

    if !*no_delay && let Some(delay) = startup_delay(cfg) {
        tracing::info!(
            "Running in {} environment. Delayed start ({:.0}s).",
            cfg.env,
            delay.as_secs_f64()
        );
        thread::sleep(delay);
    }

    let paths = cfg.paths();
    let source = match HttpSource::from_config(cfg) {
        Ok(s) => s,
        Err(e) => {
            let message = format!("Unexpected error in check: {e}");
            if let Err(log_err) = run_log::append_error(&paths.error_log(), now(), &message) {
                error(format!("Failed to write error log: {log_err}"));
            }
            return finish_failed(e, *strict);
        }
    };

    let monitor = Monitor::new(cfg, paths, source, SmtpNotifier::from_config(cfg));
    match monitor.run_logged(now()) {
        Ok(RunOutcome::NoFutureDates) => {
            info("No future dates available for tracking. Nothing fetched.");
            Ok(())
        }
        Ok(RunOutcome::FetchFailed) => {
            warning("Flight data could not be fetched. See the log for details.");
            Ok(())
        }
        Ok(RunOutcome::Completed { flights, alerts }) => {
            success(format!("Checked {flights} flights, {alerts} alerts."));
            Ok(())
        }
        Err(e) => finish_failed(e, *strict),
    }
}

fn finish_failed(e: AppError, strict: bool) -> AppResult<()> {
    if strict {
        return Err(e);
    }
    error(format!("Run failed: {e}"));
    Ok(())
}

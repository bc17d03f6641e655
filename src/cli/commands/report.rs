use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::report::render_report;
use crate::store::PriceLog;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Report { out } = cmd else {
        return Ok(());
    };

    let paths = cfg.paths();
    let out_dir = out.clone().unwrap_or_else(|| paths.root().to_path_buf());
    let log = PriceLog::new(paths.price_log());

    let summary = render_report(&log, &out_dir)?;

    if summary.skipped_rows > 0 {
        warning(format!(
            "{} price log rows skipped (unparseable dates)",
            summary.skipped_rows
        ));
    }
    success(format!(
        "{} charts rendered, report: {}",
        summary.charts.len(),
        summary.index.display()
    ));
    Ok(())
}

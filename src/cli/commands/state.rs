use crate::config::Config;
use crate::errors::AppResult;
use crate::store::HistoryStore;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;
use ansi_term::Colour;

/// Handle the `state` command: print the tracked flight map.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = HistoryStore::new(cfg.paths().history());
    let map = store.load()?;

    if map.is_empty() {
        info(format!("No tracked flights in {}", store.path().display()));
        return Ok(());
    }

    header("Tracked flights");

    let mut table = Table::new(&["Flight", "Price", "Hurry alert", "Tracked"]);
    for (key, state) in &map {
        let price = state
            .price
            .map(|p| format!("{p} {}", cfg.currency))
            .unwrap_or_else(|| "--".to_string());
        let hurry = if state.hurry_alert_sent {
            Colour::Yellow.paint("sent").to_string()
        } else {
            "-".to_string()
        };
        let tracked = if cfg.dates_to_track.contains(key) {
            Colour::Green.paint("yes").to_string()
        } else {
            "no".to_string()
        };
        table.add_row(vec![key.clone(), price, hurry, tracked]);
    }
    print!("{}", table.render());

    Ok(())
}

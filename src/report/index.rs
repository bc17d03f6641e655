use super::{CHART_EXT, CHART_PREFIX, escape};
use crate::config::paths::PLOTS_DIR;
use crate::errors::AppResult;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// HTML page listing every chart found in `plots_dir`, sorted by file name.
///
/// `titles` maps file names rendered in this run to their headings; charts
/// left over from earlier runs get a heading derived from the file name.
pub fn render_index(plots_dir: &Path, titles: &BTreeMap<String, String>) -> AppResult<String> {
    let mut files: Vec<String> = fs::read_dir(plots_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| {
            Path::new(name)
                .extension()
                .is_some_and(|ext| ext == CHART_EXT)
        })
        .collect();
    files.sort();

    let mut html = String::from(
        "<html><head><meta charset=\"utf-8\"><title>Flight Price Trends Report</title></head><body>",
    );
    html.push_str("<h1>Flight Price Trends Report</h1>");

    for file in &files {
        let title = titles
            .get(file)
            .cloned()
            .unwrap_or_else(|| title_from_file_name(file));
        let title = escape(&title);
        html.push_str(&format!("<h2>{title}</h2>"));
        html.push_str(&format!(
            "<img src=\"{PLOTS_DIR}/{}\" alt=\"Price Trend for {title}\" style=\"max-width:100%; height:auto;\">",
            escape(file)
        ));
    }

    html.push_str("</body></html>");
    Ok(html)
}

/// "flight_price_trend_2024-10-12_06-00_x_y.svg" → "Flight on 2024-10-12 06-00 x y"
fn title_from_file_name(file: &str) -> String {
    let stem = file
        .strip_prefix(CHART_PREFIX)
        .unwrap_or(file)
        .trim_end_matches(&format!(".{CHART_EXT}"))
        .replace('_', " ");
    format!("Flight on {stem}")
}

//! Price-trend report: one SVG chart per flight plus an HTML index.
//!
//! Reads only the price log, writes only under the output directory, and can
//! be rerun at any time.

pub mod chart;
pub mod index;

use crate::config::paths::{PLOTS_DIR, REPORT_FILE};
use crate::errors::AppResult;
use crate::models::PriceLogEntry;
use crate::store::PriceLog;
use crate::utils::date::{parse_flight_datetime, parse_log_timestamp};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CHART_PREFIX: &str = "flight_price_trend_";
pub const CHART_EXT: &str = "svg";

/// All observations of one flight, sorted by check time.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightGroup {
    pub flight_at: NaiveDateTime,
    pub departure: String,
    pub destination: String,
    pub points: Vec<(NaiveDateTime, i64)>,
}

impl FlightGroup {
    pub fn title(&self) -> String {
        format!("Flight on {}", self.flight_at.format("%Y-%m-%d %H:%M"))
    }

    /// Filesystem-safe name derived from the group identity.
    pub fn file_name(&self) -> String {
        format!(
            "{CHART_PREFIX}{}_{}_{}.{CHART_EXT}",
            self.flight_at.format("%Y-%m-%d_%H-%M"),
            slug(&self.departure),
            slug(&self.destination)
        )
    }

    pub fn min_point(&self) -> Option<(NaiveDateTime, i64)> {
        // first occurrence wins on ties
        self.points
            .iter()
            .copied()
            .reduce(|best, p| if p.1 < best.1 { p } else { best })
    }

    pub fn max_point(&self) -> Option<(NaiveDateTime, i64)> {
        self.points
            .iter()
            .copied()
            .reduce(|best, p| if p.1 > best.1 { p } else { best })
    }
}

#[derive(Debug)]
pub struct ReportSummary {
    pub charts: Vec<PathBuf>,
    pub index: PathBuf,
    pub skipped_rows: usize,
}

/// Group log rows by (flight datetime, departure, destination).
/// Rows whose timestamps do not parse are dropped; duplicates are kept.
pub fn group_entries(entries: &[PriceLogEntry]) -> (Vec<FlightGroup>, usize) {
    let mut groups: BTreeMap<(NaiveDateTime, String, String), Vec<(NaiveDateTime, i64)>> =
        BTreeMap::new();
    let mut skipped = 0;

    for e in entries {
        let checked = parse_log_timestamp(&e.log_date, &e.log_time);
        let flight_at = parse_flight_datetime(&e.flight_date, &e.flight_time);
        let (Some(checked), Some(flight_at)) = (checked, flight_at) else {
            debug!(?e, "skipping unparseable price log row");
            skipped += 1;
            continue;
        };
        groups
            .entry((flight_at, e.departure.clone(), e.destination.clone()))
            .or_default()
            .push((checked, e.price));
    }

    let groups = groups
        .into_iter()
        .map(|((flight_at, departure, destination), mut points)| {
            points.sort_by_key(|(t, _)| *t);
            FlightGroup {
                flight_at,
                departure,
                destination,
                points,
            }
        })
        .collect();

    (groups, skipped)
}

/// Render every chart and the index page into `out_dir`.
pub fn render_report(log: &PriceLog, out_dir: &Path) -> AppResult<ReportSummary> {
    let entries = log.read_all()?;
    let (groups, skipped_rows) = group_entries(&entries);

    let plots_dir = out_dir.join(PLOTS_DIR);
    fs::create_dir_all(&plots_dir)?;

    let mut charts = Vec::with_capacity(groups.len());
    let mut titles = BTreeMap::new();
    for group in &groups {
        let path = plots_dir.join(group.file_name());
        fs::write(&path, chart::render_svg(group))?;
        info!(
            "Saved plot for {} as {}",
            group.flight_at.format("%Y-%m-%d %H:%M"),
            path.display()
        );
        titles.insert(group.file_name(), group.title());
        charts.push(path);
    }

    let index_path = out_dir.join(REPORT_FILE);
    fs::write(&index_path, index::render_index(&plots_dir, &titles)?)?;
    info!("Generated HTML report: {}", index_path.display());

    Ok(ReportSummary {
        charts,
        index: index_path,
        skipped_rows,
    })
}

/// Lowercase ASCII alphanumerics, everything else folded into single dashes.
pub fn slug(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        "unknown".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Escape text for embedding in SVG/HTML.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

//! Plain-text diagnostics: the last-run marker and the general error log.

use crate::errors::AppResult;
use chrono::NaiveDateTime;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Overwrite the marker with a human-readable timestamp.
pub fn write_last_run(path: &Path, now: NaiveDateTime) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("Last run: {}\n", now.format("%Y-%m-%d %H:%M:%S%.6f")))?;
    Ok(())
}

/// Append "YYYY-MM-DD HH:MM:SS - message" to the general error log.
pub fn append_error(path: &Path, now: NaiveDateTime, message: &str) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{} - {}", now.format("%Y-%m-%d %H:%M:%S"), message)?;
    Ok(())
}

/// Lines of the general error log, optionally only the last `n`.
pub fn read_errors(path: &Path, last: Option<usize>) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    let lines: Vec<String> = content.lines().map(str::to_string).collect();
    Ok(match last {
        Some(n) if n < lines.len() => lines[lines.len() - n..].to_vec(),
        _ => lines,
    })
}

//! File-backed persistence: tracked state, price log, outage marker and run logs.

pub mod history;
pub mod outage;
pub mod price_log;
pub mod run_log;

pub use history::HistoryStore;
pub use outage::OutageTracker;
pub use price_log::PriceLog;

use crate::errors::AppResult;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Replace `path` with `contents` by writing a sibling temp file and renaming
/// it over the target, so readers see either the old file or the new one.
pub(crate) fn write_atomic(path: &Path, contents: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    {
        let mut file = fs::File::create(tmp)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(tmp, path) {
        let _ = fs::remove_file(tmp);
        return Err(e.into());
    }
    Ok(())
}

use crate::errors::AppResult;
use crate::models::PriceLogEntry;
use crate::models::price_entry::PRICE_LOG_HEADER;
use csv::WriterBuilder;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// Append-only CSV of observed prices. Single writer assumed.
pub struct PriceLog {
    path: PathBuf,
}

impl PriceLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append one row, writing the header first if the file is empty.
    pub fn append(&self, entry: &PriceLogEntry) -> AppResult<()> {
        self.append_all(std::slice::from_ref(entry))
    }

    pub fn append_all(&self, entries: &[PriceLogEntry]) -> AppResult<()> {
        if entries.is_empty() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let is_empty = file.metadata()?.len() == 0;

        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(file);
        if is_empty {
            wtr.write_record(PRICE_LOG_HEADER)?;
        }
        for entry in entries {
            wtr.serialize(entry)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// All rows currently in the log, duplicates included.
    pub fn read_all(&self) -> AppResult<Vec<PriceLogEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut rdr = csv::Reader::from_path(&self.path)?;
        let mut out = Vec::new();
        for row in rdr.deserialize::<PriceLogEntry>() {
            out.push(row?);
        }
        Ok(out)
    }
}

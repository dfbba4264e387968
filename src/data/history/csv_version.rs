use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::data::history::LoadPriceHistory;
use crate::domain::{PriceHistory, PricePoint};
use crate::utils::TimeUtils;

/// Reads `Date,Open` columns by header name. Other columns (e.g. the
/// prediction columns of an older export) are ignored. Rows with an empty or
/// non-finite `Open` are future rows of such an export and are skipped.
pub struct CsvHistory {
    pub path: PathBuf,
}

#[derive(Deserialize)]
struct CsvRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open")]
    open: Option<f64>,
}

impl CsvHistory {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LoadPriceHistory for CsvHistory {
    fn signature(&self) -> &'static str {
        "CSV file"
    }

    fn load_history(&self) -> Result<PriceHistory> {
        let mut reader = csv::Reader::from_path(&self.path)
            .context(format!("Failed to open history file: {:?}", self.path))?;
        let mut points = Vec::new();
        let mut skipped = 0usize;

        for (row, result) in reader.deserialize::<CsvRecord>().enumerate() {
            let record = result.context(format!("Bad CSV record {} in {:?}", row + 1, self.path))?;
            let date = TimeUtils::parse_date(&record.date)
                .context(format!("Bad date on CSV record {} in {:?}", row + 1, self.path))?;
            match record.open {
                Some(open) if open.is_finite() => points.push(PricePoint::new(date, open)),
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            log::debug!("Skipped {} row(s) without an Open price in {:?}", skipped, self.path);
        }

        let history = PriceHistory::new(points)
            .context(format!("Invalid history in {:?}", self.path))?;
        Ok(history)
    }
}

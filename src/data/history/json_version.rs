use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::data::history::LoadPriceHistory;
use crate::domain::{PriceHistory, PricePoint};

/// A JSON array of `{"date": "YYYY-MM-DD", "open": f64}`
pub struct JsonHistory {
    pub path: PathBuf,
}

impl JsonHistory {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl LoadPriceHistory for JsonHistory {
    fn signature(&self) -> &'static str {
        "JSON file"
    }

    fn load_history(&self) -> Result<PriceHistory> {
        let file = File::open(&self.path)
            .context(format!("Failed to open history file: {:?}", self.path))?;
        let points: Vec<PricePoint> = serde_json::from_reader(BufReader::new(file))
            .context(format!("Failed to parse history JSON: {:?}", self.path))?;
        let history = PriceHistory::new(points)
            .context(format!("Invalid history in {:?}", self.path))?;
        Ok(history)
    }
}

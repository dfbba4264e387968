//! Runtime configuration loaded once at startup from `configs.json`.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::PERSISTENCE;
use crate::models::ModelParameters;
use crate::utils::TimeUtils;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    #[serde(rename = "const")]
    pub const_term: f64,
    pub coef: f64,
    /// Daily (Date, Open) history used for assembly
    pub data_path: PathBuf,
    /// Optional pre-computed older series, merged in front of the fresh one
    #[serde(default)]
    pub legacy_path: Option<PathBuf>,
    /// First date taken from `data_path`. Defaults to `PERSISTENCE.default_start_date`
    #[serde(default)]
    pub start_date: Option<String>,
}

impl AppConfig {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: AppConfig = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.const_term.is_finite() || !self.coef.is_finite() {
            bail!(
                "Model parameters must be finite (const = {}, coef = {})",
                self.const_term,
                self.coef
            );
        }
        self.start()?;
        Ok(())
    }

    pub fn model_parameters(&self) -> ModelParameters {
        ModelParameters::new(self.const_term, self.coef)
    }

    pub fn start(&self) -> Result<NaiveDate> {
        let text = self
            .start_date
            .as_deref()
            .unwrap_or(PERSISTENCE.default_start_date);
        TimeUtils::parse_date(text).context(format!("Invalid start_date in config: {}", text))
    }
}

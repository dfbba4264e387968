//! Write an assembled series to disk for external charting.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::config::DEBUG_FLAGS;
use crate::models::ForecastSeries;
use crate::utils::TimeUtils;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub const CSV_HEADER: [&str; 9] = [
    "Date",
    "dayth",
    "Open",
    "Prediction",
    "PredictedLog2Open",
    "plus_bias",
    "minus_bias",
    "log_plus_bias",
    "log_minus_bias",
];

pub fn save_series(series: &ForecastSeries, path: &Path, format: ExportFormat) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create directory: {}", parent.display()))?;
    }
    match format {
        ExportFormat::Csv => save_to_csv(series, path)?,
        ExportFormat::Json => save_to_json(series, path)?,
    }
    if DEBUG_FLAGS.print_export {
        log::info!("Wrote {} rows to {}", series.len(), path.display());
    }
    Ok(())
}

/// Unobserved `Open` is an empty field, never a numeric placeholder
fn save_to_csv(series: &ForecastSeries, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .context(format!("Failed to create file: {}", path.display()))?;
    writer.write_record(CSV_HEADER)?;

    for row in series.rows() {
        writer.write_record(&[
            TimeUtils::format_date(row.date),
            row.dayth.to_string(),
            row.observed_open.map(|o| o.to_string()).unwrap_or_default(),
            row.predicted_open.to_string(),
            row.predicted_log2_open.to_string(),
            row.plus_bias.to_string(),
            row.minus_bias.to_string(),
            row.log2_plus_bias.to_string(),
            row.log2_minus_bias.to_string(),
        ])?;
    }

    writer
        .flush()
        .context(format!("Failed to write series to: {}", path.display()))
}

fn save_to_json(series: &ForecastSeries, path: &Path) -> Result<()> {
    let file = File::create(path).context(format!("Failed to create file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, series.rows())
        .context(format!("Failed to serialize series to: {}", path.display()))
}

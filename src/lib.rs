// Core modules
pub mod config;
pub mod data;
pub mod domain;
pub mod models;
pub mod report;
pub mod utils;

// Command wiring
pub mod app;

// Re-export commonly used types
pub use domain::{DateIndex, ErrorKind, ForecastError, PriceHistory, PricePoint};
pub use models::{
    BiasBandCalculator, ForecastSeries, ModelParameters, PowerLawModel, SeriesAssembler,
    SeriesRow, Signal, SignalEvaluator,
};

// CLI argument parsing
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::PERSISTENCE;
use crate::data::ExportFormat;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Runtime config with model coefficients and data paths
    #[arg(long, default_value = PERSISTENCE.app_config_path)]
    pub config: PathBuf,

    /// Daily (Date, Open) history, CSV or JSON. Overrides `data_path`
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Older series merged in front of the fresh history. Overrides `legacy_path`
    #[arg(long)]
    pub legacy: Option<PathBuf>,

    /// First date taken from the history file (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// Model constant (log2 intercept). Overrides the config file
    #[arg(long = "const", allow_negative_numbers = true)]
    pub const_term: Option<f64>,

    /// Model coefficient (log2 slope). Overrides the config file
    #[arg(long, allow_negative_numbers = true)]
    pub coef: Option<f64>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Default)]
pub enum Command {
    /// Live signal, series summary and hover lines for today (default)
    #[default]
    Report,
    /// Predicted price for a single date
    Predict {
        /// Date to predict (YYYY-MM-DD)
        date: String,
    },
    /// Classify a price as BUY / SELL / HOLD against the model
    Signal {
        #[arg(allow_negative_numbers = true)]
        price: f64,
        /// Date of the price, defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Write the assembled series to disk
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Output path, defaults to the configured export filename
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

use chrono::NaiveDate;
use std::fmt;

/// Coarse classification so callers can pick a message without matching fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    DateFormat,
    DateRange,
    InsufficientHistory,
    Domain,
}

/// Error types for the forecast core
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input text is not a `YYYY-MM-DD` calendar date
    DateFormat { input: String },
    /// Parsed date lies outside the model's validity window
    DateRange {
        date: NaiveDate,
        min_date: NaiveDate,
        max_date: NaiveDate,
    },
    /// Assembly needs at least one observed price to anchor the future rows
    InsufficientHistory,
    /// A logarithm was asked of a non-positive (or non-finite) quantity
    Domain { quantity: &'static str, value: f64 },
}

impl ForecastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForecastError::DateFormat { .. } => ErrorKind::DateFormat,
            ForecastError::DateRange { .. } => ErrorKind::DateRange,
            ForecastError::InsufficientHistory => ErrorKind::InsufficientHistory,
            ForecastError::Domain { .. } => ErrorKind::Domain,
        }
    }
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::DateFormat { input } => {
                write!(f, "Invalid date format: {:?} (expected YYYY-MM-DD)", input)
            }
            ForecastError::DateRange {
                date,
                min_date,
                max_date,
            } => write!(
                f,
                "Date {} out of range, must be between {} and {}",
                date, min_date, max_date
            ),
            ForecastError::InsufficientHistory => {
                write!(f, "Insufficient history: at least one observed price is required")
            }
            ForecastError::Domain { quantity, value } => {
                write!(f, "Domain error: log2 of non-positive {} ({})", quantity, value)
            }
        }
    }
}

impl std::error::Error for ForecastError {}

/// `log2(value)` for a finite, strictly positive quantity; `Domain` error otherwise
pub fn checked_log2(quantity: &'static str, value: f64) -> Result<f64, ForecastError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ForecastError::Domain { quantity, value });
    }
    Ok(value.log2())
}

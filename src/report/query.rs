//! Single-date prediction queries typed in by a user.

use crate::config::{DEBUG_FLAGS, QueryBounds};
use crate::domain::ForecastError;
use crate::models::{PowerLawModel, Prediction};
use crate::report::text::REPORT_TEXT;
use crate::utils::TimeUtils;
use crate::utils::format_utils::usd;

#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Predicted(Prediction),
    InvalidFormat,
    OutOfRange(QueryBounds),
}

impl QueryOutcome {
    /// Lines shown to the user for this outcome
    pub fn lines(&self) -> Vec<String> {
        match self {
            QueryOutcome::Predicted(prediction) => vec![
                REPORT_TEXT.prediction_heading.to_string(),
                usd(prediction.price),
                format!("Log₂: {:.2}", prediction.log2_price),
            ],
            QueryOutcome::InvalidFormat => vec![
                REPORT_TEXT.invalid_format_heading.to_string(),
                REPORT_TEXT.invalid_format_hint.to_string(),
            ],
            QueryOutcome::OutOfRange(bounds) => vec![
                REPORT_TEXT.out_of_range_heading.to_string(),
                format!(
                    "Please enter a date between {} and {}",
                    TimeUtils::format_date(bounds.min_date),
                    TimeUtils::format_date(bounds.max_date)
                ),
            ],
        }
    }
}

pub struct PredictionQuery<'a> {
    model: &'a PowerLawModel,
}

impl<'a> PredictionQuery<'a> {
    pub fn new(model: &'a PowerLawModel) -> Self {
        Self { model }
    }

    /// Format and range problems are user errors and become outcomes.
    /// Anything else means the model itself is broken and is returned as an error.
    pub fn run(&self, text: &str) -> Result<QueryOutcome, ForecastError> {
        let outcome = match self.model.predict_str(text) {
            Ok(prediction) => QueryOutcome::Predicted(prediction),
            Err(ForecastError::DateFormat { .. }) => QueryOutcome::InvalidFormat,
            Err(ForecastError::DateRange { .. }) => QueryOutcome::OutOfRange(self.model.bounds()),
            Err(e) => return Err(e),
        };
        if DEBUG_FLAGS.print_queries {
            log::debug!("Prediction query {:?} -> {:?}", text, outcome);
        }
        Ok(outcome)
    }
}

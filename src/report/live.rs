use chrono::NaiveDate;

use crate::domain::{ForecastError, PricePoint, checked_log2};
use crate::models::{PowerLawModel, Prediction, Signal, SignalDecision, SignalEvaluator};
use crate::report::text::REPORT_TEXT;
use crate::utils::TimeUtils;
use crate::utils::format_utils::usd;

/// The latest observation judged against the model at its own date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveSignal {
    pub date: NaiveDate,
    pub price: f64,
    pub log2_price: f64,
    pub prediction: Prediction,
    pub decision: SignalDecision,
}

impl LiveSignal {
    pub fn evaluate(
        latest: PricePoint,
        model: &PowerLawModel,
        evaluator: &SignalEvaluator,
    ) -> Result<Self, ForecastError> {
        let log2_price = checked_log2("live price", latest.open)?;
        let prediction = model.predict(latest.date)?;
        let decision = evaluator.evaluate(latest.open, prediction.price);
        Ok(LiveSignal {
            date: latest.date,
            price: latest.open,
            log2_price,
            prediction,
            decision,
        })
    }

    pub fn signal(&self) -> Signal {
        self.decision.signal
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            format!(
                "{} {}: {} ({:.1})",
                REPORT_TEXT.live_price_label,
                TimeUtils::format_date(self.date),
                usd(self.price),
                self.log2_price
            ),
            format!(
                "Model: {} | buy below {} | sell above {}",
                usd(self.prediction.price),
                usd(self.decision.buy_threshold),
                usd(self.decision.sell_threshold)
            ),
            self.decision.signal.description().to_string(),
            REPORT_TEXT.disclaimer.to_string(),
        ]
    }
}

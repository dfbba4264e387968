use serde::Serialize;

use crate::config::BandConfig;
use crate::domain::ForecastError;

/// Visual envelope around a prediction. Not a statistical confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BiasBands {
    pub plus: f64,
    pub minus: f64,
    pub log2_plus: f64,
    pub log2_minus: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiasBandCalculator {
    config: BandConfig,
}

impl BiasBandCalculator {
    pub fn new(config: BandConfig) -> Self {
        Self { config }
    }

    /// A non-positive prediction means the upstream model is broken, so this
    /// is reported as a domain error rather than a user input problem.
    pub fn bands(&self, predicted_price: f64) -> Result<BiasBands, ForecastError> {
        if !predicted_price.is_finite() || predicted_price <= 0.0 {
            return Err(ForecastError::Domain {
                quantity: "predicted price",
                value: predicted_price,
            });
        }
        let plus = predicted_price * self.config.plus_multiplier;
        let minus = predicted_price * self.config.minus_multiplier;
        Ok(BiasBands {
            plus,
            minus,
            log2_plus: plus.log2(),
            log2_minus: minus.log2(),
        })
    }
}

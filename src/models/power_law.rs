//! Closed-form power-law price model.
//!
//! `log2(price) = coef * log2(dayth) + const`, i.e. `price = 2^(coef * log2(dayth) + const)`.
//! Coefficients are supplied from configuration; nothing here fits them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::{ForecastConfig, QueryBounds};
use crate::domain::{DateIndex, ForecastError};
use crate::utils::TimeUtils;

/// The two scalars of the log-log linear model. Read-only for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    #[serde(rename = "const")]
    pub const_term: f64,
    pub coef: f64,
}

impl ModelParameters {
    pub fn new(const_term: f64, coef: f64) -> Self {
        Self { const_term, coef }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub price: f64,
    pub log2_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawModel {
    params: ModelParameters,
    index: DateIndex,
    bounds: QueryBounds,
}

impl PowerLawModel {
    pub fn new(params: ModelParameters, config: &ForecastConfig) -> Self {
        Self {
            params,
            index: DateIndex::new(config.epoch),
            bounds: config.query_bounds,
        }
    }

    pub fn date_index(&self) -> &DateIndex {
        &self.index
    }

    pub fn bounds(&self) -> QueryBounds {
        self.bounds
    }

    /// Evaluate at a raw day-index. No calendar bounds apply here, only dayth > 0.
    pub fn predict_index(&self, dayth: i64) -> Result<Prediction, ForecastError> {
        let log2_dayth = self.index.log2_index(dayth)?;
        let log2_price = self.params.coef * log2_dayth + self.params.const_term;
        Ok(Prediction {
            price: log2_price.exp2(),
            log2_price,
        })
    }

    /// Single-date prediction, restricted to the configured query bounds.
    pub fn predict(&self, date: NaiveDate) -> Result<Prediction, ForecastError> {
        if !self.bounds.contains(date) {
            return Err(ForecastError::DateRange {
                date,
                min_date: self.bounds.min_date,
                max_date: self.bounds.max_date,
            });
        }
        self.predict_index(self.index.to_index(date))
    }

    /// Free-text entry point: a parse failure is a format error, never a range error.
    pub fn predict_str(&self, text: &str) -> Result<Prediction, ForecastError> {
        let date = TimeUtils::parse_date(text)?;
        self.predict(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FORECAST;
    use crate::config::forecast::ymd;
    use crate::domain::ErrorKind;

    // Published fit for BTC daily opens
    const PARAMS: ModelParameters = ModelParameters {
        const_term: -17.01593313,
        coef: 5.84509376,
    };

    fn model() -> PowerLawModel {
        PowerLawModel::new(PARAMS, &FORECAST)
    }

    fn assert_rel_close(a: f64, b: f64) {
        let scale = a.abs().max(b.abs()).max(f64::MIN_POSITIVE);
        assert!((a - b).abs() / scale <= 1e-9, "{} vs {}", a, b);
    }

    #[test]
    fn test_log2_price_matches_formula() {
        let m = model();
        for date in [ymd(2010, 7, 19), ymd(2017, 12, 17), ymd(2025, 1, 1), ymd(2060, 7, 19)] {
            let dayth = m.date_index().to_index(date);
            let expected = PARAMS.coef * (dayth as f64).log2() + PARAMS.const_term;
            let prediction = m.predict(date).unwrap();
            assert_rel_close(prediction.log2_price, expected);
            assert_rel_close(prediction.price, 2f64.powf(expected));
        }
    }

    #[test]
    fn test_bounds_inclusive() {
        let m = model();
        assert!(m.predict(ymd(2010, 7, 19)).is_ok());
        assert!(m.predict(ymd(2060, 7, 19)).is_ok());

        let before = m.predict(ymd(2010, 7, 18)).unwrap_err();
        let after = m.predict(ymd(2060, 7, 20)).unwrap_err();
        assert_eq!(before.kind(), ErrorKind::DateRange);
        assert_eq!(after.kind(), ErrorKind::DateRange);
    }

    #[test]
    fn test_format_error_distinct_from_range() {
        let m = model();
        let err = m.predict_str("not-a-date").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DateFormat);

        let err = m.predict_str("1999-01-01").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DateRange);

        assert_eq!(m.predict_str("2025-01-01").unwrap(), m.predict(ymd(2025, 1, 1)).unwrap());
    }

    #[test]
    fn test_idempotent() {
        let m = model();
        let a = m.predict(ymd(2030, 6, 1)).unwrap();
        let b = m.predict(ymd(2030, 6, 1)).unwrap();
        assert_eq!(a.price.to_bits(), b.price.to_bits());
        assert_eq!(a.log2_price.to_bits(), b.log2_price.to_bits());
    }

    #[test]
    fn test_predict_index_rejects_non_positive() {
        let m = model();
        assert_eq!(m.predict_index(0).unwrap_err().kind(), ErrorKind::Domain);
        // dayth 1 -> log2 = 0, so the prediction collapses to the constant
        let p = m.predict_index(1).unwrap();
        assert_eq!(p.log2_price, PARAMS.const_term);
    }

    #[test]
    fn test_prediction_increases_with_date() {
        let m = model();
        let early = m.predict(ymd(2015, 1, 1)).unwrap();
        let late = m.predict(ymd(2035, 1, 1)).unwrap();
        assert!(late.price > early.price);
    }

    #[test]
    fn test_alternate_config_bounds() {
        let mut config = FORECAST;
        config.query_bounds.max_date = ymd(2030, 1, 1);
        let m = PowerLawModel::new(PARAMS, &config);
        assert!(m.predict(ymd(2030, 1, 2)).is_err());
        assert!(model().predict(ymd(2030, 1, 2)).is_ok());
    }
}

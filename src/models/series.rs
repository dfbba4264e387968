//! Series assembly: observed history + synthesized future days, every row
//! annotated with its day-index, prediction and bias bands.
//!
//! Rows are rebuilt wholesale on every run. From the first assembled date up
//! to the horizon the series is contiguous (one row per calendar day, no
//! duplicates). A future row carries `observed_open == None`; absence is never
//! encoded as a number.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{DEBUG_FLAGS, ForecastConfig};
use crate::domain::{DateIndex, ForecastError, PricePoint, checked_log2};
use crate::models::bias_bands::BiasBandCalculator;
use crate::models::power_law::{ModelParameters, PowerLawModel};
use crate::models::trace::{Scale, Trace};
use crate::utils::TimeUtils;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesRow {
    pub date: NaiveDate,
    pub dayth: i64,
    pub observed_open: Option<f64>,
    pub predicted_log2_open: f64,
    pub predicted_open: f64,
    pub plus_bias: f64,
    pub minus_bias: f64,
    pub log2_plus_bias: f64,
    pub log2_minus_bias: f64,
}

impl SeriesRow {
    pub fn is_observed(&self) -> bool {
        self.observed_open.is_some()
    }

    /// log2 of the observed open, absent for future rows
    pub fn log2_observed_open(&self) -> Option<f64> {
        self.observed_open.map(f64::log2)
    }

    /// Value of one curve on one scale. Only `Trace::Observed` can be absent.
    pub fn value(&self, trace: Trace, scale: Scale) -> Option<f64> {
        let log = scale.is_log_price();
        match trace {
            Trace::Observed if log => self.log2_observed_open(),
            Trace::Observed => self.observed_open,
            Trace::Predicted if log => Some(self.predicted_log2_open),
            Trace::Predicted => Some(self.predicted_open),
            Trace::PlusBand if log => Some(self.log2_plus_bias),
            Trace::PlusBand => Some(self.plus_bias),
            Trace::MinusBand if log => Some(self.log2_minus_bias),
            Trace::MinusBand => Some(self.minus_bias),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSeries {
    rows: Vec<SeriesRow>,
    horizon: NaiveDate,
}

impl ForecastSeries {
    pub fn rows(&self) -> &[SeriesRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn horizon(&self) -> NaiveDate {
        self.horizon
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.rows.first().map(|r| r.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.rows.last().map(|r| r.date)
    }

    /// Date of the final row that carries an observed open
    pub fn last_known_date(&self) -> Option<NaiveDate> {
        self.rows.iter().rev().find(|r| r.is_observed()).map(|r| r.date)
    }

    pub fn observed_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_observed()).count()
    }

    pub fn row_at(&self, date: NaiveDate) -> Option<&SeriesRow> {
        self.rows
            .binary_search_by_key(&date, |r| r.date)
            .ok()
            .map(|i| &self.rows[i])
    }

    pub fn row_at_index(&self, dayth: i64) -> Option<&SeriesRow> {
        self.rows
            .binary_search_by_key(&dayth, |r| r.dayth)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// One curve as `(x, y)` points; x is dayth on `LogLog`, row position otherwise.
    /// Rows where the curve is absent are skipped rather than zero-filled.
    pub fn trace_points(&self, trace: Trace, scale: Scale) -> Vec<(f64, f64)> {
        self.rows
            .iter()
            .enumerate()
            .filter_map(|(i, row)| {
                let x = match scale {
                    Scale::LogLog => row.dayth as f64,
                    _ => i as f64,
                };
                row.value(trace, scale).map(|y| (x, y))
            })
            .collect()
    }
}

pub struct SeriesAssembler {
    model: PowerLawModel,
    bands: BiasBandCalculator,
    horizon_days: i64,
}

impl SeriesAssembler {
    pub fn new(params: ModelParameters, config: &ForecastConfig) -> Self {
        Self {
            model: PowerLawModel::new(params, config),
            bands: BiasBandCalculator::new(config.bands),
            horizon_days: config.horizon_days,
        }
    }

    pub fn model(&self) -> &PowerLawModel {
        &self.model
    }

    pub fn date_index(&self) -> &DateIndex {
        self.model.date_index()
    }

    /// `today + horizon_days`
    pub fn horizon_from(&self, today: NaiveDate) -> Option<NaiveDate> {
        TimeUtils::add_days(today, self.horizon_days)
    }

    /// Build one row. Prediction columns never depend on whether the row is observed.
    /// An observed open must be finite and positive so its log2 form exists.
    pub fn row(&self, date: NaiveDate, observed_open: Option<f64>) -> Result<SeriesRow, ForecastError> {
        if let Some(open) = observed_open {
            checked_log2("observed open", open)?;
        }
        let dayth = self.date_index().to_index(date);
        let prediction = self.model.predict_index(dayth)?;
        let bands = self.bands.bands(prediction.price)?;
        Ok(SeriesRow {
            date,
            dayth,
            observed_open,
            predicted_log2_open: prediction.log2_price,
            predicted_open: prediction.price,
            plus_bias: bands.plus,
            minus_bias: bands.minus,
            log2_plus_bias: bands.log2_plus,
            log2_minus_bias: bands.log2_minus,
        })
    }

    /// Merge `history` (ordered, distinct dates, already filtered to `>= start`)
    /// with synthesized rows from the day after the last observation to `horizon`.
    ///
    /// Interior calendar days missing from `history` are filled with unobserved
    /// rows so the result stays gap-free.
    pub fn assemble(
        &self,
        history: &[PricePoint],
        horizon: NaiveDate,
    ) -> Result<ForecastSeries, ForecastError> {
        let (first, last) = match (history.first(), history.last()) {
            (Some(first), Some(last)) => (first.date, last.date),
            _ => return Err(ForecastError::InsufficientHistory),
        };
        debug_assert!(
            history.windows(2).all(|w| w[0].date < w[1].date),
            "history must be strictly increasing"
        );

        let end = last.max(horizon);
        let capacity = (end - first).num_days().max(0) as usize + 1;
        let mut rows: Vec<SeriesRow> = Vec::with_capacity(capacity);
        let mut filled_gaps = 0usize;

        // 1. Historical prefix (plus fillers for any missing interior days)
        for point in history {
            if let Some(prev) = rows.last().map(|r| r.date) {
                let mut day = prev;
                while let Some(next) = day.succ_opt().filter(|d| *d < point.date) {
                    rows.push(self.row(next, None)?);
                    filled_gaps += 1;
                    day = next;
                }
            }
            rows.push(self.row(point.date, Some(point.open))?);
        }

        // 2. Future extension, from last_known_date + 1 to horizon inclusive
        let mut synthesized = 0usize;
        let mut day = last;
        while let Some(next) = day.succ_opt().filter(|d| *d <= horizon) {
            rows.push(self.row(next, None)?);
            synthesized += 1;
            day = next;
        }

        if filled_gaps > 0 {
            log::warn!(
                "History had {} missing day(s) between {} and {}; filled as unobserved rows",
                filled_gaps,
                first,
                last
            );
        }
        if DEBUG_FLAGS.print_assembly {
            log::debug!(
                "Assembled {} rows ({} observed, {} synthesized) from {} to {}",
                rows.len(),
                history.len(),
                synthesized,
                first,
                end
            );
        }

        Ok(ForecastSeries { rows, horizon })
    }

    /// Put older observations in front of an assembled series.
    /// Legacy dates on or after the series' first date are dropped (the fresh
    /// rows win); the legacy part is recomputed through the same model so its
    /// band columns are always populated. Gaps inside the legacy part are kept.
    pub fn prepend_legacy(
        &self,
        series: ForecastSeries,
        legacy: &[PricePoint],
    ) -> Result<ForecastSeries, ForecastError> {
        let Some(cutoff) = series.first_date() else {
            return Ok(series);
        };
        let mut rows = Vec::with_capacity(legacy.len() + series.rows.len());
        for point in legacy.iter().take_while(|p| p.date < cutoff) {
            rows.push(self.row(point.date, Some(point.open))?);
        }
        let kept = rows.len();
        if kept < legacy.len() {
            log::info!(
                "Dropped {} legacy row(s) overlapping the assembled series (from {})",
                legacy.len() - kept,
                cutoff
            );
        }
        rows.extend(series.rows);
        Ok(ForecastSeries {
            rows,
            horizon: series.horizon,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FORECAST;
    use crate::config::forecast::ymd;
    use crate::domain::ErrorKind;
    use strum::IntoEnumIterator;

    const PARAMS: ModelParameters = ModelParameters {
        const_term: -17.01593313,
        coef: 5.84509376,
    };

    fn assembler() -> SeriesAssembler {
        SeriesAssembler::new(PARAMS, &FORECAST)
    }

    fn jan(days: &[u32]) -> Vec<PricePoint> {
        days.iter()
            .map(|&d| PricePoint::new(ymd(2020, 1, d), 7000.0 + d as f64))
            .collect()
    }

    #[test]
    fn test_assemble_extends_to_horizon() {
        let history = jan(&[1, 2, 3]);
        let series = assembler().assemble(&history, ymd(2020, 1, 5)).unwrap();

        let dates: Vec<NaiveDate> = series.rows().iter().map(|r| r.date).collect();
        assert_eq!(dates, (1..=5).map(|d| ymd(2020, 1, d)).collect::<Vec<_>>());

        for (row, point) in series.rows().iter().zip(&history) {
            assert_eq!(row.observed_open, Some(point.open));
        }
        assert_eq!(series.rows()[3].observed_open, None);
        assert_eq!(series.rows()[4].observed_open, None);

        for pair in series.rows().windows(2) {
            assert_eq!(pair[1].dayth, pair[0].dayth + 1);
        }
        assert_eq!(series.last_known_date(), Some(ymd(2020, 1, 3)));
        assert_eq!(series.observed_count(), 3);
    }

    #[test]
    fn test_empty_history_fails() {
        let err = assembler().assemble(&[], ymd(2020, 1, 5)).unwrap_err();
        assert_eq!(err, ForecastError::InsufficientHistory);
        assert_eq!(err.kind(), ErrorKind::InsufficientHistory);
    }

    #[test]
    fn test_invalid_observed_open_fails() {
        let a = assembler();
        for open in [0.0, -1.0, f64::NAN] {
            let history = vec![PricePoint::new(ymd(2020, 1, 1), open)];
            let err = a.assemble(&history, ymd(2020, 1, 2)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Domain);
        }

        let series = a.assemble(&jan(&[10]), ymd(2020, 1, 11)).unwrap();
        let legacy = vec![PricePoint::new(ymd(2020, 1, 5), -3.0)];
        let err = a.prepend_legacy(series, &legacy).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);
    }

    #[test]
    fn test_history_before_first_index_fails() {
        // 2009-01-04 maps to dayth 0, which has no log2
        let history = vec![
            PricePoint::new(ymd(2009, 1, 4), 1.0),
            PricePoint::new(ymd(2009, 1, 5), 1.0),
        ];
        let err = assembler().assemble(&history, ymd(2009, 1, 6)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Domain);

        let ok = vec![PricePoint::new(ymd(2009, 1, 5), 1.0)];
        let series = assembler().assemble(&ok, ymd(2009, 1, 6)).unwrap();
        assert_eq!(series.rows()[0].dayth, 1);
    }

    #[test]
    fn test_history_past_horizon_not_truncated() {
        let history = jan(&[1, 2, 3]);
        let series = assembler().assemble(&history, ymd(2020, 1, 2)).unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.rows().iter().all(|r| r.is_observed()));
    }

    #[test]
    fn test_horizon_equal_to_last_day() {
        let series = assembler().assemble(&jan(&[1, 2, 3]), ymd(2020, 1, 3)).unwrap();
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_interior_gap_filled_unobserved() {
        let series = assembler().assemble(&jan(&[1, 4]), ymd(2020, 1, 4)).unwrap();
        let observed: Vec<bool> = series.rows().iter().map(|r| r.is_observed()).collect();
        assert_eq!(observed, vec![true, false, false, true]);
        assert_eq!(series.row_at(ymd(2020, 1, 4)).unwrap().observed_open, Some(7004.0));
    }

    #[test]
    fn test_predictions_populated_on_every_row() {
        let a = assembler();
        let series = a.assemble(&jan(&[1, 2]), ymd(2020, 1, 10)).unwrap();
        for row in series.rows() {
            let expected = a.model().predict(row.date).unwrap();
            assert_eq!(row.predicted_log2_open, expected.log2_price);
            assert_eq!(row.predicted_open, expected.price);
            assert!((row.plus_bias / row.predicted_open - 1.8).abs() < 1e-12);
            assert!((row.minus_bias / row.predicted_open - 0.45).abs() < 1e-12);
            assert!(row.log2_plus_bias.is_finite() && row.log2_minus_bias.is_finite());
        }
    }

    #[test]
    fn test_horizon_from_today() {
        let a = assembler();
        assert_eq!(a.horizon_from(ymd(2024, 3, 1)), Some(ymd(2025, 3, 1)));
        assert_eq!(a.horizon_from(ymd(2023, 3, 1)), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_value_lookup_by_trace() {
        let series = assembler().assemble(&jan(&[1]), ymd(2020, 1, 2)).unwrap();
        let observed = &series.rows()[0];
        let future = &series.rows()[1];

        assert_eq!(observed.value(Trace::Observed, Scale::Linear), Some(7001.0));
        assert_eq!(
            observed.value(Trace::Observed, Scale::Log2),
            Some(7001.0f64.log2())
        );
        assert_eq!(future.value(Trace::Observed, Scale::LogLog), None);
        assert_eq!(
            future.value(Trace::PlusBand, Scale::Log2),
            Some(future.log2_plus_bias)
        );
        assert_eq!(
            future.value(Trace::MinusBand, Scale::Linear),
            Some(future.minus_bias)
        );
        for trace in Trace::iter().filter(|t| *t != Trace::Observed) {
            for scale in Scale::iter() {
                assert!(future.value(trace, scale).is_some());
            }
        }
    }

    #[test]
    fn test_trace_points_skip_absent() {
        let series = assembler().assemble(&jan(&[1, 2]), ymd(2020, 1, 6)).unwrap();
        assert_eq!(series.trace_points(Trace::Observed, Scale::Linear).len(), 2);
        assert_eq!(series.trace_points(Trace::Predicted, Scale::Linear).len(), 6);

        let loglog = series.trace_points(Trace::Predicted, Scale::LogLog);
        assert_eq!(loglog[0].0, series.rows()[0].dayth as f64);
    }

    #[test]
    fn test_row_lookup() {
        let series = assembler().assemble(&jan(&[1, 2]), ymd(2020, 1, 4)).unwrap();
        let row = series.row_at(ymd(2020, 1, 3)).unwrap();
        assert_eq!(series.row_at_index(row.dayth), Some(row));
        assert!(series.row_at(ymd(2019, 12, 31)).is_none());
    }

    #[test]
    fn test_prepend_legacy() {
        let a = assembler();
        let series = a.assemble(&jan(&[10, 11]), ymd(2020, 1, 12)).unwrap();
        let legacy = vec![
            PricePoint::new(ymd(2020, 1, 7), 1.0),
            PricePoint::new(ymd(2020, 1, 9), 2.0),
            PricePoint::new(ymd(2020, 1, 10), 999.0),
        ];

        let merged = a.prepend_legacy(series, &legacy).unwrap();
        let dates: Vec<u32> = merged
            .rows()
            .iter()
            .map(|r| chrono::Datelike::day(&r.date))
            .collect();
        assert_eq!(dates, vec![7, 9, 10, 11, 12]);
        // Fresh row wins over the overlapping legacy one
        assert_eq!(merged.row_at(ymd(2020, 1, 10)).unwrap().observed_open, Some(7010.0));
        assert_eq!(merged.rows()[0].plus_bias, merged.rows()[0].predicted_open * 1.8);
        assert_eq!(merged.horizon(), ymd(2020, 1, 12));
    }
}

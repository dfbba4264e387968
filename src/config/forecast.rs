//! Forecast engine configuration: epoch anchor, band and signal multipliers.

use chrono::NaiveDate;

/// Compile-time calendar date. Invalid literals fail the build, not the run.
pub const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date literal"),
    }
}

/// Anchor of the day-index ("dayth") scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochConfig {
    pub date: NaiveDate,
    // Empirical offset from the fitted model, kept as-is
    pub offset_days: i64,
}

/// Multiplicative envelope drawn around the predicted price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandConfig {
    pub plus_multiplier: f64,
    pub minus_multiplier: f64,
}

/// Thresholds (as fractions of the prediction) for the live signal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalConfig {
    pub buy_multiplier: f64,
    pub sell_multiplier: f64,
}

/// Inclusive date range accepted by single-date prediction queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryBounds {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

impl QueryBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min_date && date <= self.max_date
    }
}

/// The Master Forecast Configuration.
/// Passed explicitly into every component so tests can swap in alternates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastConfig {
    pub epoch: EpochConfig,
    pub bands: BandConfig,
    pub signal: SignalConfig,
    pub query_bounds: QueryBounds,
    /// How far past "today" the assembled series extends
    pub horizon_days: i64,
}

pub const FORECAST: ForecastConfig = ForecastConfig {
    epoch: EpochConfig {
        date: ymd(2010, 7, 19),
        offset_days: 561,
    },

    bands: BandConfig {
        plus_multiplier: 1.8,
        minus_multiplier: 0.45,
    },

    signal: SignalConfig {
        buy_multiplier: 0.6,
        sell_multiplier: 1.8,
    },

    query_bounds: QueryBounds {
        min_date: ymd(2010, 7, 19),
        max_date: ymd(2060, 7, 19),
    },

    horizon_days: 365,
};

impl Default for ForecastConfig {
    fn default() -> Self {
        FORECAST
    }
}

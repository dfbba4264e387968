use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One observed daily open
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, open: f64) -> Self {
        PricePoint { date, open }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HistoryError {
    /// Dates must be strictly increasing (distinct and ordered)
    NotIncreasing {
        index: usize,
        previous: NaiveDate,
        date: NaiveDate,
    },
    /// Opens must be finite and > 0
    InvalidOpen {
        index: usize,
        date: NaiveDate,
        open: f64,
    },
}

impl std::error::Error for HistoryError {}
impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HistoryError::NotIncreasing {
                index,
                previous,
                date,
            } => write!(
                f,
                "History not strictly increasing at row {}: {} follows {}",
                index, date, previous
            ),
            HistoryError::InvalidOpen { index, date, open } => write!(
                f,
                "Invalid open price at row {} ({}): {}",
                index, date, open
            ),
        }
    }
}

/// Ordered daily history as supplied by an ingestion provider.
/// Construction validates ordering, so downstream code never re-sorts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceHistory {
    points: Vec<PricePoint>,
}

impl PriceHistory {
    pub fn new(points: Vec<PricePoint>) -> Result<Self, HistoryError> {
        for (index, point) in points.iter().enumerate() {
            if !point.open.is_finite() || point.open <= 0.0 {
                return Err(HistoryError::InvalidOpen {
                    index,
                    date: point.date,
                    open: point.open,
                });
            }
        }
        if let Some((index, (prev, next))) = points
            .iter()
            .tuple_windows()
            .enumerate()
            .find(|(_, (prev, next))| next.date <= prev.date)
        {
            return Err(HistoryError::NotIncreasing {
                index: index + 1,
                previous: prev.date,
                date: next.date,
            });
        }
        Ok(PriceHistory { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Most recent observation, used for the live signal
    pub fn latest(&self) -> Option<PricePoint> {
        self.points.last().copied()
    }

    /// Points with `date >= start`, still ordered
    pub fn since(&self, start: NaiveDate) -> &[PricePoint] {
        let first = self.points.partition_point(|p| p.date < start);
        &self.points[first..]
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    /// Count of calendar days missing between first and last observation
    pub fn missing_days(&self) -> i64 {
        self.points
            .iter()
            .tuple_windows()
            .map(|(prev, next)| (next.date - prev.date).num_days() - 1)
            .sum()
    }
}

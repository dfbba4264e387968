//! Calendar date <-> day-index ("dayth") mapping.
//!
//! `dayth(date) = (date - epoch.date).days + epoch.offset_days`
//!
//! The mapping is strictly increasing and exact in both directions. Range
//! checks are left to callers: `to_index` accepts any date, and only
//! `log2_index` rejects the non-positive indices that fall before
//! `epoch.date - offset_days`.

use chrono::NaiveDate;

use crate::config::EpochConfig;
use crate::domain::ForecastError;
use crate::utils::TimeUtils;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateIndex {
    epoch: EpochConfig,
}

impl DateIndex {
    pub fn new(epoch: EpochConfig) -> Self {
        Self { epoch }
    }

    #[inline]
    pub fn to_index(&self, date: NaiveDate) -> i64 {
        (date - self.epoch.date).num_days() + self.epoch.offset_days
    }

    /// Inverse of [`DateIndex::to_index`].
    /// `None` only when the index lands outside chrono's representable calendar.
    pub fn to_date(&self, dayth: i64) -> Option<NaiveDate> {
        let days_from_epoch = dayth.checked_sub(self.epoch.offset_days)?;
        TimeUtils::add_days(self.epoch.date, days_from_epoch)
    }

    pub fn log2_index(&self, dayth: i64) -> Result<f64, ForecastError> {
        if dayth <= 0 {
            return Err(ForecastError::Domain {
                quantity: "day index",
                value: dayth as f64,
            });
        }
        Ok((dayth as f64).log2())
    }

    /// Earliest date whose index is positive (dayth == 1).
    pub fn min_usable_date(&self) -> Option<NaiveDate> {
        self.to_date(1)
    }
}

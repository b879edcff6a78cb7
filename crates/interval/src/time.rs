//! Maintenance intervals over elapsed calendar days.

use chrono::{NaiveDate, TimeDelta};
use tracing::trace;

use crate::error::IntervalError;
use crate::interval::{Interval, Unit};
use crate::periodicity::Periodicities;
use crate::subdivision::Subdivision;

/// Calendar-based maintenance interval.
///
/// Periodicities are day counts measured from a fixed start date. Dates are
/// projected onto the number of days since the start, the same divisor
/// search as [`DistanceInterval`](crate::DistanceInterval) runs on that
/// count, and boundaries are projected back to dates.
///
/// Dates before the start are accepted; their subdivision uses floor
/// semantics so it still brackets the date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeInterval {
    periodicities: Periodicities,
    start_date: NaiveDate,
}

impl TimeInterval {
    /// Creates a time interval over `periodicities` days, counted from
    /// `start_date`.
    pub fn new(periodicities: Periodicities, start_date: NaiveDate) -> Self {
        Self {
            periodicities,
            start_date,
        }
    }

    /// Creates a time interval from raw day counts.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty or contains a zero.
    pub fn from_values(values: Vec<u32>, start_date: NaiveDate) -> Result<Self, IntervalError> {
        Periodicities::new(values).map(|p| Self::new(p, start_date))
    }

    /// Returns the periodicity set (in days).
    pub fn periodicities(&self) -> &Periodicities {
        &self.periodicities
    }

    /// Returns the origin of the day axis.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the signed number of days from the start date to `date`.
    pub fn days_since_start(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.start_date).num_days()
    }

    fn shift(date: NaiveDate, days: i64) -> Result<NaiveDate, IntervalError> {
        TimeDelta::try_days(days)
            .and_then(|delta| date.checked_add_signed(delta))
            .ok_or(IntervalError::DateOutOfRange { start: date, days })
    }

    /// Lists the start date plus every multiple of `periodicities[index]`
    /// days, up to and including `end`. Empty when `end` precedes the start.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::IndexOutOfRange`] for an invalid index.
    pub fn generate_interval(
        &self,
        index: usize,
        end: NaiveDate,
    ) -> Result<Vec<NaiveDate>, IntervalError> {
        let step = self.periodicities.get(index)?;
        (0..=self.days_since_start(end))
            .step_by(step as usize)
            .map(|days| Self::shift(self.start_date, days))
            .collect()
    }

    /// Returns the base-unit boundary dates bracketing `date`.
    ///
    /// The start date itself yields `(start, start + base days)`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::DateOutOfRange`] if a boundary falls outside
    /// the representable calendar.
    pub fn subdivision(&self, date: NaiveDate) -> Result<Subdivision<NaiveDate>, IntervalError> {
        let base = i64::from(self.periodicities.base());
        let past_lower = self.days_since_start(date).rem_euclid(base);
        let lower = Self::shift(date, -past_lower)?;
        let upper = Self::shift(lower, base)?;
        Ok(Subdivision::new(lower, upper))
    }

    /// Returns the largest periodicity (in days) that divides the day
    /// offset of the upper boundary bracketing `date`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NoSubmultiple`] if no periodicity divides
    /// the boundary offset, or [`IntervalError::DateOutOfRange`] on calendar
    /// overflow.
    pub fn closest_major(&self, date: NaiveDate) -> Result<u32, IntervalError> {
        let upper = *self.subdivision(date)?.upper();
        let offset = self.days_since_start(upper);
        let major = self
            .periodicities
            .largest_submultiple(offset)
            .ok_or(IntervalError::NoSubmultiple { offset })?;
        trace!(%date, offset, major, "closest major");
        Ok(major)
    }

    /// Returns the largest periodicity (in days) that divides the day offset
    /// of the lower boundary bracketing `date`.
    ///
    /// Returns `None` when `date` is on or before `start + base days`. Note
    /// the inclusive bound: the distance variant uses a strict one.
    ///
    /// # Errors
    ///
    /// Same as [`closest_major`](Self::closest_major).
    pub fn nearest_minor(&self, date: NaiveDate) -> Result<Option<u32>, IntervalError> {
        let first_boundary = Self::shift(
            self.start_date,
            i64::from(self.periodicities.base()),
        )?;
        if date <= first_boundary {
            return Ok(None);
        }
        let lower = *self.subdivision(date)?.lower();
        let offset = self.days_since_start(lower);
        let minor = self
            .periodicities
            .largest_submultiple(offset)
            .ok_or(IntervalError::NoSubmultiple { offset })?;
        trace!(%date, offset, minor, "nearest minor");
        Ok(Some(minor))
    }
}

impl Interval for TimeInterval {
    type Reading = NaiveDate;

    const UNIT: Unit = Unit::Days;

    fn offset(&self, reading: &NaiveDate) -> Result<i64, IntervalError> {
        Ok(self.days_since_start(*reading))
    }

    fn closest_major(&self, reading: &NaiveDate) -> Result<u32, IntervalError> {
        TimeInterval::closest_major(self, *reading)
    }
}

//! Maintenance intervals over accumulated distance.

use tracing::trace;

use crate::error::IntervalError;
use crate::interval::{Interval, Unit};
use crate::periodicity::Periodicities;
use crate::subdivision::Subdivision;

/// Distance-based maintenance interval.
///
/// Readings are odometer values with origin 0. All queries are pure
/// functions of the periodicity set and the reading.
///
/// # Example
///
/// ```
/// use cadence_interval::{DistanceInterval, Periodicities};
///
/// let km = DistanceInterval::new(Periodicities::new(vec![50, 150, 300, 1000]).unwrap());
/// assert_eq!(km.subdivision(125).unwrap().into_tuple(), (100, 150));
/// assert_eq!(km.closest_major(125).unwrap(), 150);
/// assert_eq!(km.nearest_minor(25).unwrap(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceInterval {
    periodicities: Periodicities,
}

impl DistanceInterval {
    /// Creates a distance interval over `periodicities`.
    pub fn new(periodicities: Periodicities) -> Self {
        Self { periodicities }
    }

    /// Creates a distance interval from raw values.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` is empty or contains a zero.
    pub fn from_values(values: Vec<u32>) -> Result<Self, IntervalError> {
        Periodicities::new(values).map(Self::new)
    }

    /// Returns the periodicity set.
    pub fn periodicities(&self) -> &Periodicities {
        &self.periodicities
    }

    /// Lists every multiple of `periodicities[index]` from 0 up to the
    /// largest periodicity, inclusive when it lands exactly on it.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::IndexOutOfRange`] for an invalid index.
    pub fn generate_interval(&self, index: usize) -> Result<Vec<i64>, IntervalError> {
        let step = self.periodicities.get(index)?;
        let max = i64::from(self.periodicities.max());
        Ok((0..=max).step_by(step as usize).collect())
    }

    /// Returns the base-unit boundaries bracketing `value`.
    ///
    /// A reading of 0 yields `(0, base)`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NegativeReading`] if `value < 0`, or
    /// [`IntervalError::ReadingOutOfRange`] if the upper boundary does not
    /// fit in an `i64`.
    pub fn subdivision(&self, value: i64) -> Result<Subdivision<i64>, IntervalError> {
        if value < 0 {
            return Err(IntervalError::NegativeReading { value });
        }
        let base = i64::from(self.periodicities.base());
        let lower = (value / base) * base;
        let upper = lower
            .checked_add(base)
            .ok_or(IntervalError::ReadingOutOfRange { value })?;
        Ok(Subdivision::new(lower, upper))
    }

    /// Returns the largest periodicity that divides the upper boundary
    /// bracketing `value`.
    ///
    /// The upper boundary is a multiple of the base unit, so a candidate
    /// always exists.
    ///
    /// # Errors
    ///
    /// Same as [`subdivision`](Self::subdivision).
    pub fn closest_major(&self, value: i64) -> Result<u32, IntervalError> {
        let upper = *self.subdivision(value)?.upper();
        let major = self
            .periodicities
            .largest_submultiple(upper)
            .unwrap_or_else(|| self.periodicities.base());
        trace!(value, upper, major, "closest major");
        Ok(major)
    }

    /// Returns the largest periodicity that divides the lower boundary
    /// bracketing `value`, or `None` while `value` is below the base unit
    /// (negative readings included).
    pub fn nearest_minor(&self, value: i64) -> Result<Option<u32>, IntervalError> {
        if value < i64::from(self.periodicities.base()) {
            return Ok(None);
        }
        let lower = *self.subdivision(value)?.lower();
        let minor = self.periodicities.largest_submultiple(lower);
        trace!(value, lower, ?minor, "nearest minor");
        Ok(minor)
    }
}

impl Interval for DistanceInterval {
    type Reading = i64;

    const UNIT: Unit = Unit::Kilometers;

    fn offset(&self, reading: &i64) -> Result<i64, IntervalError> {
        Ok(*reading)
    }

    fn closest_major(&self, reading: &i64) -> Result<u32, IntervalError> {
        DistanceInterval::closest_major(self, *reading)
    }
}

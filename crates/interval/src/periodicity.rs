//! Validated periodicity sets and the shared submultiple search.

use crate::error::IntervalError;

/// An ordered, non-empty set of positive maintenance periodicities.
///
/// The first element is the base unit that every subdivision is built on.
/// Ordering and uniqueness are not enforced: duplicates only produce
/// redundant candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Periodicities(Vec<u32>);

impl Periodicities {
    /// Creates a periodicity set.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::EmptyPeriodicities`] if `values` is empty and
    /// [`IntervalError::NonPositivePeriodicity`] if any value is zero.
    pub fn new(values: Vec<u32>) -> Result<Self, IntervalError> {
        if values.is_empty() {
            return Err(IntervalError::EmptyPeriodicities);
        }
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| **v == 0) {
            return Err(IntervalError::NonPositivePeriodicity { index, value });
        }
        Ok(Self(values))
    }

    /// Returns the base unit (first periodicity).
    pub fn base(&self) -> u32 {
        self.0[0]
    }

    /// Returns the largest periodicity.
    pub fn max(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or_else(|| self.base())
    }

    /// Returns the periodicity at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<u32, IntervalError> {
        self.0
            .get(index)
            .copied()
            .ok_or(IntervalError::IndexOutOfRange {
                index,
                len: self.0.len(),
            })
    }

    /// Returns the number of periodicities.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the periodicities as a slice.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Returns the largest periodicity that evenly divides `offset`.
    ///
    /// Divisibility uses `rem_euclid`, so negative offsets behave like their
    /// absolute value. An offset of 0 is divisible by every periodicity and
    /// always yields [`max`](Self::max).
    pub fn largest_submultiple(&self, offset: i64) -> Option<u32> {
        self.0
            .iter()
            .copied()
            .filter(|&p| offset.rem_euclid(i64::from(p)) == 0)
            .max()
    }
}

impl TryFrom<Vec<u32>> for Periodicities {
    type Error = IntervalError;

    fn try_from(values: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[u32]> for Periodicities {
    type Error = IntervalError;

    fn try_from(values: &[u32]) -> Result<Self, Self::Error> {
        Self::new(values.to_vec())
    }
}

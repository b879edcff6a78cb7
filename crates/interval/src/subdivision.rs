//! Bracketing pair of boundaries around a reading.

/// The pair of base-unit boundaries that bracket a reading.
///
/// `lower <= reading < upper` for every reading at or after the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subdivision<T> {
    lower: T,
    upper: T,
}

impl<T> Subdivision<T> {
    pub(crate) fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Returns the lower boundary.
    pub fn lower(&self) -> &T {
        &self.lower
    }

    /// Returns the upper boundary.
    pub fn upper(&self) -> &T {
        &self.upper
    }

    /// Consumes the subdivision, returning `(lower, upper)`.
    pub fn into_tuple(self) -> (T, T) {
        (self.lower, self.upper)
    }
}

impl<T: PartialOrd> Subdivision<T> {
    /// Returns `true` if `value` lies in `[lower, upper)`.
    pub fn contains(&self, value: &T) -> bool {
        &self.lower <= value && value < &self.upper
    }
}

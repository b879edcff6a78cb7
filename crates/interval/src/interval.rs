//! The measurement axis shared by distance and calendar intervals.

use std::fmt;

use crate::error::IntervalError;

/// Unit of the integer axis an interval projects readings onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Distance traveled.
    Kilometers,
    /// Elapsed calendar days since the interval's start date.
    Days,
}

impl Unit {
    /// Returns the label used in maintenance alert text.
    pub fn label(self) -> &'static str {
        match self {
            Unit::Kilometers => "kilómetros",
            Unit::Days => "días",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A maintenance interval queried by readings of type [`Interval::Reading`].
///
/// Implementors project a reading onto an integer axis whose origin is 0
/// (distance) or a start date (time), and find the closest major
/// periodicity on that axis.
pub trait Interval {
    /// The reading type (an odometer value or a date).
    type Reading;

    /// Unit of the integer axis.
    const UNIT: Unit;

    /// Projects `reading` onto the integer axis.
    fn offset(&self, reading: &Self::Reading) -> Result<i64, IntervalError>;

    /// Returns the largest periodicity dividing the upper boundary that
    /// brackets `reading`.
    fn closest_major(&self, reading: &Self::Reading) -> Result<u32, IntervalError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_labels() {
        assert_eq!(Unit::Kilometers.label(), "kilómetros");
        assert_eq!(Unit::Days.to_string(), "días");
    }
}

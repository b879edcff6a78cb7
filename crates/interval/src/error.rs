//! Error types for the cadence-interval crate.

/// Error type for all fallible operations in the cadence-interval crate.
///
/// Every variant is local to the query that produced it. Interval
/// computations hold no state, so there is nothing to roll back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    /// Returned when an interval is constructed without any periodicity.
    #[error("periodicity set must not be empty")]
    EmptyPeriodicities,

    /// Returned when a periodicity is zero.
    #[error("periodicity at index {index} must be > 0, got {value}")]
    NonPositivePeriodicity {
        /// Position of the offending periodicity.
        index: usize,
        /// The invalid periodicity value.
        value: u32,
    },

    /// Returned when a distance reading is negative.
    #[error("reading must be >= 0, got {value}")]
    NegativeReading {
        /// The invalid reading.
        value: i64,
    },

    /// Returned when the upper boundary of a distance reading exceeds `i64::MAX`.
    #[error("reading {value} has no representable upper boundary")]
    ReadingOutOfRange {
        /// The reading whose boundary overflowed.
        value: i64,
    },

    /// Returned when a periodicity index does not exist.
    #[error("periodicity index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of periodicities in the set.
        len: usize,
    },

    /// Returned when no periodicity evenly divides a boundary offset.
    #[error("no submultiple found for boundary offset {offset}")]
    NoSubmultiple {
        /// Offset of the boundary from the interval origin.
        offset: i64,
    },

    /// Returned when date arithmetic leaves the representable calendar range.
    #[error("date out of range: {start} + {days} days")]
    DateOutOfRange {
        /// The date the offset was applied to.
        start: chrono::NaiveDate,
        /// The offset in days.
        days: i64,
    },
}

//! Error types for the cadence-logbook crate.

use cadence_interval::IntervalError;

/// Error type for all fallible operations in the cadence-logbook crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogbookError {
    /// Returned when a query for one schedule kind receives an operation
    /// scheduled by the other kind.
    #[error("operation is scheduled by {found}, expected {expected}")]
    ScheduleMismatch {
        /// Schedule kind the query works on.
        expected: &'static str,
        /// Schedule kind of the operation passed in.
        found: &'static str,
    },

    /// Returned when the underlying interval computation fails.
    #[error(transparent)]
    Interval(#[from] IntervalError),
}

//! Independent distance and time evaluation.

use chrono::NaiveDate;

use cadence_interval::{DistanceInterval, IntervalError, TimeInterval};

use crate::alert::{Alert, evaluate};

/// Evaluates a distance reading against `interval` with a margin in
/// kilometers.
///
/// # Errors
///
/// Returns [`IntervalError::NegativeReading`] for a negative odometer value,
/// or [`IntervalError::ReadingOutOfRange`] when its boundary overflows.
pub fn evaluate_distance(
    interval: &DistanceInterval,
    current_value: i64,
    preventive_margin: i64,
) -> Result<Alert, IntervalError> {
    evaluate(interval, &current_value, preventive_margin)
}

/// Evaluates a date against `interval` with a margin in days.
///
/// # Errors
///
/// Returns the [`IntervalError`] raised by the interval query.
pub fn evaluate_time(
    interval: &TimeInterval,
    current_date: NaiveDate,
    preventive_days: i64,
) -> Result<Alert, IntervalError> {
    evaluate(interval, &current_date, preventive_days)
}

/// Both decisions of a combined evaluation.
///
/// Neither decision suppresses or outranks the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinedAlert {
    /// Distance decision.
    pub distance: Alert,
    /// Time decision.
    pub time: Alert,
}

impl CombinedAlert {
    /// Returns `true` if either decision is due.
    pub fn any_due(&self) -> bool {
        self.distance.is_due() || self.time.is_due()
    }

    /// Returns the messages of the due decisions, distance first.
    pub fn messages(&self) -> Vec<String> {
        [self.distance, self.time]
            .iter()
            .filter_map(Alert::message)
            .collect()
    }
}

/// Runs [`evaluate_distance`] and [`evaluate_time`] independently.
///
/// # Errors
///
/// Returns the first error raised by either evaluation.
#[tracing::instrument(level = "debug", skip(distance_interval, time_interval))]
pub fn evaluate_combined(
    distance_interval: &DistanceInterval,
    time_interval: &TimeInterval,
    current_value: i64,
    preventive_margin: i64,
    current_date: NaiveDate,
    preventive_days: i64,
) -> Result<CombinedAlert, IntervalError> {
    let distance = evaluate_distance(distance_interval, current_value, preventive_margin)?;
    let time = evaluate_time(time_interval, current_date, preventive_days)?;
    Ok(CombinedAlert { distance, time })
}

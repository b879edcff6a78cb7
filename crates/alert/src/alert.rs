//! Due-soon decisions for a single interval.

use std::fmt;

use cadence_interval::{Interval, IntervalError, Unit};
use tracing::{debug, info};

/// Outcome of comparing a reading against its closest major periodicity.
///
/// Evaluation never prints. Callers decide where the message goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    unit: Unit,
    closest_major: u32,
    current_offset: i64,
    margin: i64,
    due_soon: bool,
}

impl Alert {
    /// Returns the unit of the compared axis.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Returns the closest major periodicity the reading was compared to.
    pub fn closest_major(&self) -> u32 {
        self.closest_major
    }

    /// Returns the reading projected onto the axis.
    pub fn current_offset(&self) -> i64 {
        self.current_offset
    }

    /// Returns the preventive margin used.
    pub fn margin(&self) -> i64 {
        self.margin
    }

    /// Returns `closest_major - current_offset`.
    pub fn gap(&self) -> i64 {
        i64::from(self.closest_major) - self.current_offset
    }

    /// Returns `true` when `closest_major - margin <= current_offset`.
    pub fn is_due(&self) -> bool {
        self.due_soon
    }

    /// Returns the alert text, or `None` when maintenance is not due soon.
    pub fn message(&self) -> Option<String> {
        self.due_soon.then(|| self.to_string())
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Alerta de mantenimiento: el vehículo está a {} {} del próximo mantenimiento.",
            self.gap(),
            self.unit
        )
    }
}

/// Evaluates whether `reading` is within `margin` of its closest major
/// periodicity on `interval`.
///
/// # Errors
///
/// Propagates the [`IntervalError`] of the underlying interval query
/// unchanged.
pub fn evaluate<I: Interval>(
    interval: &I,
    reading: &I::Reading,
    margin: i64,
) -> Result<Alert, IntervalError> {
    let closest_major = interval.closest_major(reading)?;
    let current_offset = interval.offset(reading)?;
    // Widened so extreme margins from config cannot overflow the comparison.
    let due_soon =
        i128::from(closest_major) - i128::from(margin) <= i128::from(current_offset);
    debug!(
        unit = %I::UNIT,
        closest_major,
        current_offset,
        margin,
        due_soon,
        "evaluated maintenance interval"
    );
    let alert = Alert {
        unit: I::UNIT,
        closest_major,
        current_offset,
        margin,
        due_soon,
    };
    if due_soon {
        info!(unit = %I::UNIT, gap = alert.gap(), "maintenance due soon");
    }
    Ok(alert)
}

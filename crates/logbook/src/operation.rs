//! Scheduled maintenance operations.

use std::fmt;

use crate::error::LogbookError;
use crate::vocabulary::{Task, VehicleSystem};

/// How often an operation recurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schedule {
    /// Every `n` distance units.
    Distance(u32),
    /// Every `n` days.
    Time(u32),
}

impl Schedule {
    /// Returns `"distance"` or `"time"`.
    pub fn kind(self) -> &'static str {
        match self {
            Schedule::Distance(_) => "distance",
            Schedule::Time(_) => "time",
        }
    }

    /// Returns the period regardless of kind.
    pub fn period(self) -> u32 {
        match self {
            Schedule::Distance(n) | Schedule::Time(n) => n,
        }
    }
}

/// A task on a vehicle system, repeated on a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    /// What is done.
    pub task: Task,
    /// Where it is done.
    pub system: VehicleSystem,
    /// How often it is done.
    pub schedule: Schedule,
}

impl Operation {
    /// Creates an operation.
    pub fn new(task: Task, system: VehicleSystem, schedule: Schedule) -> Self {
        Self {
            task,
            system,
            schedule,
        }
    }

    /// Returns the distance period.
    ///
    /// # Errors
    ///
    /// Returns [`LogbookError::ScheduleMismatch`] for a time schedule.
    pub fn distance_period(&self) -> Result<u32, LogbookError> {
        match self.schedule {
            Schedule::Distance(n) => Ok(n),
            other => Err(LogbookError::ScheduleMismatch {
                expected: "distance",
                found: other.kind(),
            }),
        }
    }

    /// Returns the time period in days.
    ///
    /// # Errors
    ///
    /// Returns [`LogbookError::ScheduleMismatch`] for a distance schedule.
    pub fn time_period(&self) -> Result<u32, LogbookError> {
        match self.schedule {
            Schedule::Time(n) => Ok(n),
            other => Err(LogbookError::ScheduleMismatch {
                expected: "time",
                found: other.kind(),
            }),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.system,
            self.task,
            self.schedule.period()
        )
    }
}

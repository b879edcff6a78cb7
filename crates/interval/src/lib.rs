//! # cadence-interval
//!
//! Nearest-boundary arithmetic for maintenance schedules measured in
//! distance or in calendar days.
//!
//! ## Architecture
//!
//! ```text
//! reading ──offset──▶ i64 on the axis
//!                       │
//!                       ├─ subdivision()    floor to the base unit: [lower, upper)
//!                       ├─ closest_major()  largest periodicity dividing upper
//!                       └─ nearest_minor()  largest periodicity dividing lower
//!                                           (Periodicities::largest_submultiple)
//! ```
//!
//! [`DistanceInterval`] works on odometer values with origin 0.
//! [`TimeInterval`] works on dates, projected to days since a start date.
//! Both implement [`Interval`], the seam consumed by alert evaluation.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use cadence_interval::{DistanceInterval, TimeInterval};
//!
//! let km = DistanceInterval::from_values(vec![50, 150, 300, 1000]).unwrap();
//! assert_eq!(km.closest_major(299).unwrap(), 300);
//! assert_eq!(km.nearest_minor(301).unwrap(), Some(300));
//!
//! let start = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
//! let days = TimeInterval::from_values(vec![7, 14, 30], start).unwrap();
//! let date = NaiveDate::from_ymd_opt(2022, 1, 10).unwrap();
//! assert_eq!(days.closest_major(date).unwrap(), 14);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `periodicity` | Validated periodicity set and submultiple search |
//! | `subdivision` | Bracketing boundary pair |
//! | `distance` | Distance-based interval |
//! | `time` | Calendar-based interval |
//! | `interval` | `Interval` trait and axis units |
//! | `error` | Error types |

mod distance;
mod error;
mod interval;
mod periodicity;
mod subdivision;
mod time;

pub use distance::DistanceInterval;
pub use error::IntervalError;
pub use interval::{Interval, Unit};
pub use periodicity::Periodicities;
pub use subdivision::Subdivision;
pub use time::TimeInterval;

//! Preventive maintenance alerts.
//!
//! An alert is due when a reading has come within a preventive margin of
//! the closest major periodicity of its interval:
//!
//! ```text
//! closest_major - margin <= current_offset
//! ```
//!
//! The decision is returned as an [`Alert`] value together with its
//! message, so callers choose whether it goes to a console, a log or a
//! notification.
//!
//! # Quick start
//!
//! ```
//! use cadence_alert::evaluate_distance;
//! use cadence_interval::DistanceInterval;
//!
//! let km = DistanceInterval::from_values(vec![50, 150, 300, 1000]).unwrap();
//! let alert = evaluate_distance(&km, 145, 5).unwrap();
//! assert!(alert.is_due());
//! assert_eq!(alert.gap(), 5);
//! ```

pub mod alert;
pub mod combined;

pub use alert::{Alert, evaluate};
pub use combined::{CombinedAlert, evaluate_combined, evaluate_distance, evaluate_time};

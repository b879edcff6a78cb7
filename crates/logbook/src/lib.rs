//! In-memory vehicle logbook and maintenance sheet.
//!
//! A [`Vehicle`] keeps its odometer readings; a [`MaintenanceSheet`]
//! schedules [`Operation`]s on it and answers which inspection points are
//! behind and ahead. Single-period schedules reuse the boundary arithmetic
//! of `cadence-interval`.
//!
//! ```
//! use chrono::NaiveDate;
//! use cadence_logbook::{
//!     DistanceUnit, MaintenanceSheet, OdometerReading, Operation, Schedule, Task, Vehicle,
//!     VehicleSystem,
//! };
//!
//! let day = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
//! let mut car = Vehicle::new("Mi auto", OdometerReading::new(0, DistanceUnit::Kilometers, day));
//! car.record(1000, DistanceUnit::Kilometers, day);
//!
//! let mut sheet = MaintenanceSheet::new(car);
//! let brakes = Operation::new(Task::Inspect, VehicleSystem::Brakes, Schedule::Distance(100));
//! sheet.add_operation(brakes);
//! assert_eq!(sheet.next_inspection_distance(&brakes).unwrap(), Some(1100));
//! ```

mod error;
mod operation;
mod sheet;
mod vehicle;
mod vocabulary;

pub use error::LogbookError;
pub use operation::{Operation, Schedule};
pub use sheet::MaintenanceSheet;
pub use vehicle::{DistanceUnit, OdometerReading, Vehicle};
pub use vocabulary::{Task, VehicleSystem};

//! Maintenance sheet: a vehicle and the operations scheduled on it.

use chrono::NaiveDate;
use tracing::debug;

use cadence_interval::{DistanceInterval, Periodicities, Subdivision, TimeInterval};

use crate::error::LogbookError;
use crate::operation::Operation;
use crate::vehicle::Vehicle;

/// A vehicle's maintenance sheet.
///
/// Distance queries run against the latest odometer reading. Time queries
/// count days from the first reading's date to `today`.
#[derive(Debug, Clone)]
pub struct MaintenanceSheet {
    vehicle: Vehicle,
    operations: Vec<Operation>,
}

impl MaintenanceSheet {
    /// Creates an empty sheet for `vehicle`.
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            operations: Vec::new(),
        }
    }

    /// Returns the vehicle.
    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Returns the vehicle mutably, to record new readings.
    pub fn vehicle_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicle
    }

    /// Adds an operation.
    pub fn add_operation(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// Returns the operations in insertion order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    fn distance_subdivision(
        &self,
        operation: &Operation,
    ) -> Result<Option<Subdivision<i64>>, LogbookError> {
        let period = operation.distance_period()?;
        let Some(latest) = self.vehicle.latest_reading() else {
            return Ok(None);
        };
        let interval = DistanceInterval::from_values(vec![period])?;
        Ok(Some(interval.subdivision(latest.value)?))
    }

    fn time_interval(&self, operation: &Operation) -> Result<Option<TimeInterval>, LogbookError> {
        let period = operation.time_period()?;
        let Some(first) = self.vehicle.first_reading() else {
            return Ok(None);
        };
        Ok(Some(TimeInterval::from_values(
            vec![period],
            first.recorded_on,
        )?))
    }

    /// Lists every inspection point from 0 up to the latest reading.
    ///
    /// # Errors
    ///
    /// Returns [`LogbookError::ScheduleMismatch`] for a time-scheduled
    /// operation.
    pub fn past_inspections_distance(
        &self,
        operation: &Operation,
    ) -> Result<Vec<i64>, LogbookError> {
        let period = Periodicities::new(vec![operation.distance_period()?])?.base();
        let Some(latest) = self.vehicle.latest_reading() else {
            return Ok(Vec::new());
        };
        let points: Vec<i64> = (0..=latest.value).step_by(period as usize).collect();
        debug!(%operation, n = points.len(), "past distance inspections");
        Ok(points)
    }

    /// Lists every inspection date from the first reading up to `today`.
    ///
    /// # Errors
    ///
    /// Returns [`LogbookError::ScheduleMismatch`] for a distance-scheduled
    /// operation.
    pub fn past_inspections_time(
        &self,
        operation: &Operation,
        today: NaiveDate,
    ) -> Result<Vec<NaiveDate>, LogbookError> {
        let Some(interval) = self.time_interval(operation)? else {
            return Ok(Vec::new());
        };
        let dates = interval.generate_interval(0, today)?;
        debug!(%operation, n = dates.len(), "past time inspections");
        Ok(dates)
    }

    /// Returns the next inspection point after the latest reading.
    ///
    /// # Errors
    ///
    /// Returns [`LogbookError::ScheduleMismatch`] for a time-scheduled
    /// operation, or an interval error for a negative reading.
    pub fn next_inspection_distance(
        &self,
        operation: &Operation,
    ) -> Result<Option<i64>, LogbookError> {
        Ok(self
            .distance_subdivision(operation)?
            .map(|s| *s.upper()))
    }

    /// Returns the last inspection point at or before the latest reading.
    ///
    /// # Errors
    ///
    /// Same as [`next_inspection_distance`](Self::next_inspection_distance).
    pub fn last_inspection_distance(
        &self,
        operation: &Operation,
    ) -> Result<Option<i64>, LogbookError> {
        Ok(self
            .distance_subdivision(operation)?
            .map(|s| *s.lower()))
    }

    /// Returns the next inspection date after `today`.
    ///
    /// # Errors
    ///
    /// Returns [`LogbookError::ScheduleMismatch`] for a distance-scheduled
    /// operation.
    pub fn next_inspection_time(
        &self,
        operation: &Operation,
        today: NaiveDate,
    ) -> Result<Option<NaiveDate>, LogbookError> {
        let Some(interval) = self.time_interval(operation)? else {
            return Ok(None);
        };
        Ok(Some(*interval.subdivision(today)?.upper()))
    }

    /// Returns the last inspection date at or before `today`.
    ///
    /// # Errors
    ///
    /// Same as [`next_inspection_time`](Self::next_inspection_time).
    pub fn last_inspection_time(
        &self,
        operation: &Operation,
        today: NaiveDate,
    ) -> Result<Option<NaiveDate>, LogbookError> {
        let Some(interval) = self.time_interval(operation)? else {
            return Ok(None);
        };
        Ok(Some(*interval.subdivision(today)?.lower()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Schedule;
    use crate::vehicle::{DistanceUnit, OdometerReading};
    use crate::vocabulary::{Task, VehicleSystem};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sheet() -> MaintenanceSheet {
        let mut car = Vehicle::new(
            "Mi auto",
            OdometerReading::new(0, DistanceUnit::Kilometers, ymd(2023, 4, 1)),
        );
        car.record(1000, DistanceUnit::Kilometers, ymd(2023, 5, 20));
        let mut sheet = MaintenanceSheet::new(car);
        sheet.add_operation(Operation::new(
            Task::Inspect,
            VehicleSystem::Brakes,
            Schedule::Distance(100),
        ));
        sheet.add_operation(Operation::new(
            Task::Lubricate,
            VehicleSystem::Engine,
            Schedule::Time(30),
        ));
        sheet
    }

    #[test]
    fn past_distance() {
        let sheet = sheet();
        let got = sheet.past_inspections_distance(&sheet.operations()[0]).unwrap();
        let expected: Vec<i64> = (0..=10).map(|i| i * 100).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn next_and_last_distance_on_boundary() {
        let sheet = sheet();
        let op = sheet.operations()[0];
        assert_eq!(sheet.next_inspection_distance(&op).unwrap(), Some(1100));
        assert_eq!(sheet.last_inspection_distance(&op).unwrap(), Some(1000));
    }

    #[test]
    fn next_and_last_distance_between_boundaries() {
        let mut sheet = sheet();
        sheet
            .vehicle_mut()
            .record(1234, DistanceUnit::Kilometers, ymd(2023, 6, 1));
        let op = sheet.operations()[0];
        assert_eq!(sheet.next_inspection_distance(&op).unwrap(), Some(1300));
        assert_eq!(sheet.last_inspection_distance(&op).unwrap(), Some(1200));
    }

    #[test]
    fn past_time() {
        let sheet = sheet();
        let got = sheet
            .past_inspections_time(&sheet.operations()[1], ymd(2023, 6, 1))
            .unwrap();
        assert_eq!(
            got,
            vec![ymd(2023, 4, 1), ymd(2023, 5, 1), ymd(2023, 5, 31)]
        );
    }

    #[test]
    fn next_and_last_time() {
        let sheet = sheet();
        let op = sheet.operations()[1];
        let today = ymd(2023, 6, 1);
        assert_eq!(
            sheet.next_inspection_time(&op, today).unwrap(),
            Some(ymd(2023, 6, 30))
        );
        assert_eq!(
            sheet.last_inspection_time(&op, today).unwrap(),
            Some(ymd(2023, 5, 31))
        );
    }

    #[test]
    fn schedule_mismatch() {
        let sheet = sheet();
        let km = sheet.operations()[0];
        let days = sheet.operations()[1];
        assert!(matches!(
            sheet.past_inspections_time(&km, ymd(2023, 6, 1)),
            Err(LogbookError::ScheduleMismatch { expected: "time", .. })
        ));
        assert!(matches!(
            sheet.next_inspection_distance(&days),
            Err(LogbookError::ScheduleMismatch { expected: "distance", .. })
        ));
    }

    #[test]
    fn negative_reading_surfaces_interval_error() {
        let car = Vehicle::new(
            "Averiado",
            OdometerReading::new(-5, DistanceUnit::Kilometers, ymd(2023, 4, 1)),
        );
        let sheet = MaintenanceSheet::new(car);
        let op = Operation::new(Task::Repair, VehicleSystem::Tires, Schedule::Distance(50));
        assert!(matches!(
            sheet.next_inspection_distance(&op),
            Err(LogbookError::Interval(_))
        ));
    }
}

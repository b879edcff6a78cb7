//! Vehicles and their odometer log.

use chrono::NaiveDate;

/// Unit an odometer reading was taken in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DistanceUnit {
    /// Kilometers.
    #[default]
    Kilometers,
    /// Miles.
    Miles,
}

/// A single odometer entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OdometerReading {
    /// Odometer value.
    pub value: i64,
    /// Unit of `value`.
    pub unit: DistanceUnit,
    /// Day the reading was taken.
    pub recorded_on: NaiveDate,
}

impl OdometerReading {
    /// Creates a reading.
    pub fn new(value: i64, unit: DistanceUnit, recorded_on: NaiveDate) -> Self {
        Self {
            value,
            unit,
            recorded_on,
        }
    }
}

/// A vehicle with its in-memory odometer log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    name: String,
    log: Vec<OdometerReading>,
}

impl Vehicle {
    /// Creates a vehicle whose log starts with `initial`.
    pub fn new(name: impl Into<String>, initial: OdometerReading) -> Self {
        Self {
            name: name.into(),
            log: vec![initial],
        }
    }

    /// Returns the vehicle name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a reading to the log.
    pub fn record(&mut self, value: i64, unit: DistanceUnit, recorded_on: NaiveDate) {
        self.log.push(OdometerReading::new(value, unit, recorded_on));
    }

    /// Returns every reading in insertion order.
    pub fn log(&self) -> &[OdometerReading] {
        &self.log
    }

    /// Returns the most recent reading. Among readings on the same day the
    /// last recorded wins.
    pub fn latest_reading(&self) -> Option<&OdometerReading> {
        self.log.iter().max_by_key(|r| r.recorded_on)
    }

    /// Returns the oldest reading. Among readings on the same day the first
    /// recorded wins.
    pub fn first_reading(&self) -> Option<&OdometerReading> {
        self.log.iter().min_by_key(|r| r.recorded_on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn car() -> Vehicle {
        Vehicle::new(
            "Mi auto",
            OdometerReading::new(0, DistanceUnit::Kilometers, ymd(2023, 4, 1)),
        )
    }

    #[test]
    fn new_has_initial_reading() {
        let v = car();
        assert_eq!(v.name(), "Mi auto");
        assert_eq!(v.log().len(), 1);
        assert_eq!(v.latest_reading(), v.first_reading());
    }

    #[test]
    fn latest_and_first_by_date() {
        let mut v = car();
        v.record(1000, DistanceUnit::Kilometers, ymd(2023, 6, 1));
        // Back-dated entry inserted last.
        v.record(400, DistanceUnit::Kilometers, ymd(2023, 5, 1));
        assert_eq!(v.latest_reading().unwrap().value, 1000);
        assert_eq!(v.first_reading().unwrap().value, 0);
    }

    #[test]
    fn same_day_latest_is_last_recorded() {
        let mut v = car();
        v.record(120, DistanceUnit::Kilometers, ymd(2023, 6, 1));
        v.record(180, DistanceUnit::Kilometers, ymd(2023, 6, 1));
        assert_eq!(v.latest_reading().unwrap().value, 180);
    }

    #[test]
    fn default_unit_is_kilometers() {
        assert_eq!(DistanceUnit::default(), DistanceUnit::Kilometers);
    }
}

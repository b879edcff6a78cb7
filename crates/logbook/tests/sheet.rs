use chrono::NaiveDate;
use cadence_logbook::{
    DistanceUnit, LogbookError, MaintenanceSheet, OdometerReading, Operation, Schedule, Task,
    Vehicle, VehicleSystem,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn demo_vehicle_schedule() {
    let mut car = Vehicle::new(
        "Mi auto",
        OdometerReading::new(0, DistanceUnit::Kilometers, ymd(2023, 4, 1)),
    );
    car.record(1000, DistanceUnit::Kilometers, ymd(2023, 7, 1));

    let mut sheet = MaintenanceSheet::new(car);
    let brakes = Operation::new(Task::Inspect, VehicleSystem::Brakes, Schedule::Distance(100));
    let engine = Operation::new(Task::Lubricate, VehicleSystem::Engine, Schedule::Time(30));
    sheet.add_operation(brakes);
    sheet.add_operation(engine);
    assert_eq!(sheet.operations().len(), 2);

    let today = ymd(2023, 7, 15);
    let km = sheet.past_inspections_distance(&brakes).unwrap();
    assert_eq!(km.len(), 11);
    assert_eq!(*km.last().unwrap(), 1000);

    let dates = sheet.past_inspections_time(&engine, today).unwrap();
    assert_eq!(dates.first(), Some(&ymd(2023, 4, 1)));
    assert_eq!(dates.last(), Some(&ymd(2023, 6, 30)));
    assert_eq!(dates.len(), 4);

    let last = sheet.last_inspection_time(&engine, today).unwrap().unwrap();
    let next = sheet.next_inspection_time(&engine, today).unwrap().unwrap();
    assert!(last <= today && today < next);
    assert_eq!((next - last).num_days(), 30);
}

#[test]
fn today_before_first_reading() {
    let car = Vehicle::new(
        "Nuevo",
        OdometerReading::new(0, DistanceUnit::Kilometers, ymd(2023, 4, 1)),
    );
    let sheet = MaintenanceSheet::new(car);
    let engine = Operation::new(Task::Adjust, VehicleSystem::Engine, Schedule::Time(30));

    let today = ymd(2023, 3, 20);
    assert!(sheet.past_inspections_time(&engine, today).unwrap().is_empty());
    assert_eq!(
        sheet.last_inspection_time(&engine, today).unwrap(),
        Some(ymd(2023, 3, 2))
    );
    assert_eq!(
        sheet.next_inspection_time(&engine, today).unwrap(),
        Some(ymd(2023, 4, 1))
    );
}

#[test]
fn zero_period_is_rejected() {
    let car = Vehicle::new(
        "Nuevo",
        OdometerReading::new(10, DistanceUnit::Kilometers, ymd(2023, 4, 1)),
    );
    let sheet = MaintenanceSheet::new(car);
    let op = Operation::new(Task::Torque, VehicleSystem::Tires, Schedule::Distance(0));
    assert!(matches!(
        sheet.next_inspection_distance(&op),
        Err(LogbookError::Interval(_))
    ));
}

#[test]
fn zero_period_past_inspections_is_rejected() {
    let car = Vehicle::new(
        "Nuevo",
        OdometerReading::new(10, DistanceUnit::Kilometers, ymd(2023, 4, 1)),
    );
    let sheet = MaintenanceSheet::new(car);
    let op = Operation::new(Task::Torque, VehicleSystem::Tires, Schedule::Distance(0));
    assert!(matches!(
        sheet.past_inspections_distance(&op),
        Err(LogbookError::Interval(_))
    ));
}

//! Closed vocabulary of maintenance tasks and vehicle systems.

use std::fmt;

/// Kind of maintenance work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Adjust.
    Adjust,
    /// Inspect.
    Inspect,
    /// Repair.
    Repair,
    /// Tighten to torque specification.
    Torque,
    /// Lubricate or grease.
    Lubricate,
}

impl Task {
    /// All tasks, in declaration order.
    pub const ALL: [Task; 5] = [
        Task::Adjust,
        Task::Inspect,
        Task::Repair,
        Task::Torque,
        Task::Lubricate,
    ];

    /// Returns the logbook label.
    pub fn label(self) -> &'static str {
        match self {
            Task::Adjust => "Ajustar",
            Task::Inspect => "Inspeccionar",
            Task::Repair => "Reparacion",
            Task::Torque => "Ajustar Torque",
            Task::Lubricate => "Lubricar o engrasar",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Vehicle system a task applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleSystem {
    /// Brakes.
    Brakes,
    /// Engine.
    Engine,
    /// Tires.
    Tires,
}

impl VehicleSystem {
    /// All systems, in declaration order.
    pub const ALL: [VehicleSystem; 3] = [
        VehicleSystem::Brakes,
        VehicleSystem::Engine,
        VehicleSystem::Tires,
    ];

    /// Returns the logbook label.
    pub fn label(self) -> &'static str {
        match self {
            VehicleSystem::Brakes => "Frenos",
            VehicleSystem::Engine => "Motor",
            VehicleSystem::Tires => "Llantas",
        }
    }
}

impl fmt::Display for VehicleSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_labels() {
        let labels: Vec<_> = Task::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(
            labels,
            [
                "Ajustar",
                "Inspeccionar",
                "Reparacion",
                "Ajustar Torque",
                "Lubricar o engrasar"
            ]
        );
    }

    #[test]
    fn system_labels() {
        let labels: Vec<_> = VehicleSystem::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, ["Frenos", "Motor", "Llantas"]);
    }
}

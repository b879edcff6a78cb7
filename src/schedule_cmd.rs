//! Schedule command: list maintenance points for every periodicity.

use anyhow::Result;
use tracing::{debug, info_span};

use crate::cli::ScheduleArgs;
use crate::config;
use crate::convert;

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the distance schedule and, when configured, the time schedule.
pub fn run(args: ScheduleArgs) -> Result<()> {
    let _cmd = info_span!("schedule").entered();
    let config = config::load(&args.config)?;

    let distance = convert::build_distance_interval(&config.distance)?;
    for (index, period) in distance.periodicities().as_slice().iter().enumerate() {
        let points = distance.generate_interval(index)?;
        println!("every {period} km: {}", join(&points));
    }

    match config.time.as_ref() {
        Some(time_toml) => {
            let time = convert::build_time_interval(time_toml)?;
            let until = args
                .until
                .unwrap_or_else(|| chrono::Local::now().date_naive());
            for (index, period) in time.periodicities().as_slice().iter().enumerate() {
                let dates = time.generate_interval(index, until)?;
                println!("every {period} days until {until}: {}", join(&dates));
            }
        }
        None => debug!("no [time] section, skipping time schedule"),
    }

    Ok(())
}

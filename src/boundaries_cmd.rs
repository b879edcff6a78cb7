//! Boundaries command: show subdivision, closest major and nearest minor.

use anyhow::{Context, Result, bail};
use tracing::info_span;

use crate::cli::BoundariesArgs;
use crate::config;
use crate::convert;

fn describe_minor(minor: Option<u32>) -> String {
    minor.map_or_else(|| "none".to_string(), |m| m.to_string())
}

/// Print the boundaries bracketing the given odometer value and/or date.
pub fn run(args: BoundariesArgs) -> Result<()> {
    let _cmd = info_span!("boundaries").entered();
    if args.odometer.is_none() && args.date.is_none() {
        bail!("nothing to bracket: provide --odometer, --date, or both");
    }
    let config = config::load(&args.config)?;

    if let Some(odometer) = args.odometer {
        let interval = convert::build_distance_interval(&config.distance)?;
        let (lower, upper) = interval
            .subdivision(odometer)
            .with_context(|| format!("cannot bracket odometer {odometer}"))?
            .into_tuple();
        let major = interval.closest_major(odometer)?;
        let minor = interval.nearest_minor(odometer)?;
        println!("odometer {odometer}: [{lower}, {upper})");
        println!("  closest major: {major} km");
        println!("  nearest minor: {}", describe_minor(minor));
    }

    if let Some(date) = args.date {
        let interval = convert::build_time_interval(convert::require_time(&config)?)?;
        let (lower, upper) = interval
            .subdivision(date)
            .with_context(|| format!("cannot bracket date {date}"))?
            .into_tuple();
        let major = interval.closest_major(date)?;
        let minor = interval.nearest_minor(date)?;
        println!(
            "date {date} (day {}): [{lower}, {upper})",
            interval.days_since_start(date)
        );
        println!("  closest major: {major} days");
        println!("  nearest minor: {}", describe_minor(minor));
    }

    Ok(())
}

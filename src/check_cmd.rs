//! Check command: evaluate distance and time alerts.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use cadence_alert::evaluate_combined;

use crate::cli::CheckArgs;
use crate::config;
use crate::convert;

/// Run the combined alert evaluation and print every due alert.
pub fn run(args: CheckArgs) -> Result<()> {
    let _cmd = info_span!("check").entered();
    let config = config::load(&args.config)?;

    let distance = convert::build_distance_interval(&config.distance)?;
    let time_toml = convert::require_time(&config)?;
    let time = convert::build_time_interval(time_toml)?;

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    info!(odometer = args.odometer, %date, "evaluating maintenance alerts");

    let combined = evaluate_combined(
        &distance,
        &time,
        args.odometer,
        config.distance.margin,
        date,
        time_toml.margin_days,
    )
    .context("alert evaluation failed")?;

    for message in combined.messages() {
        println!("{message}");
    }
    if !combined.any_due() {
        info!("no maintenance due");
    }

    Ok(())
}

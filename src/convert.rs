//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};

use cadence_interval::{DistanceInterval, TimeInterval};

use crate::config::{CadenceConfig, DistanceToml, TimeToml};

/// Builds a [`DistanceInterval`] from the `[distance]` section.
pub fn build_distance_interval(distance: &DistanceToml) -> Result<DistanceInterval> {
    DistanceInterval::from_values(distance.periodicities.clone())
        .context("invalid [distance].periodicities")
}

/// Builds a [`TimeInterval`] from the `[time]` section.
pub fn build_time_interval(time: &TimeToml) -> Result<TimeInterval> {
    TimeInterval::from_values(time.periodicities.clone(), time.start_date)
        .context("invalid [time].periodicities")
}

/// Returns the `[time]` section, failing if it is absent.
pub fn require_time(config: &CadenceConfig) -> Result<&TimeToml> {
    match config.time.as_ref() {
        Some(time) => Ok(time),
        None => bail!("no time schedule: add a [time] section with start_date to the config"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn distance_from_defaults() {
        let interval = build_distance_interval(&DistanceToml::default()).unwrap();
        assert_eq!(interval.periodicities().as_slice(), &[50, 150, 300, 1000]);
    }

    #[test]
    fn empty_distance_periodicities_fail() {
        let toml = DistanceToml {
            periodicities: vec![],
            margin: 5,
        };
        let err = build_distance_interval(&toml).unwrap_err();
        assert!(format!("{err:#}").contains("periodicity set must not be empty"));
    }

    #[test]
    fn time_interval_from_section() {
        let toml = TimeToml {
            start_date: NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            periodicities: vec![7, 14, 30],
            margin_days: 7,
        };
        let interval = build_time_interval(&toml).unwrap();
        assert_eq!(interval.start_date(), toml.start_date);
        assert_eq!(interval.periodicities().base(), 7);
    }

    #[test]
    fn missing_time_section() {
        let cfg = CadenceConfig::default();
        assert!(require_time(&cfg).is_err());
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

/// Top-level Cadence configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CadenceConfig {
    /// Distance-based schedule.
    #[serde(default)]
    pub distance: DistanceToml,

    /// Calendar-based schedule. Requires a start date, so it has no default.
    #[serde(default)]
    pub time: Option<TimeToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistanceToml {
    #[serde(default = "default_distance_periodicities")]
    pub periodicities: Vec<u32>,
    #[serde(default = "default_distance_margin")]
    pub margin: i64,
}

impl Default for DistanceToml {
    fn default() -> Self {
        Self {
            periodicities: default_distance_periodicities(),
            margin: default_distance_margin(),
        }
    }
}

fn default_distance_periodicities() -> Vec<u32> {
    vec![50, 150, 300, 1000]
}
fn default_distance_margin() -> i64 {
    5
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeToml {
    pub start_date: NaiveDate,
    #[serde(default = "default_time_periodicities")]
    pub periodicities: Vec<u32>,
    #[serde(default = "default_margin_days")]
    pub margin_days: i64,
}

fn default_time_periodicities() -> Vec<u32> {
    vec![15, 30, 60]
}
fn default_margin_days() -> i64 {
    7
}

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<CadenceConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let cfg: CadenceConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.distance.periodicities, vec![50, 150, 300, 1000]);
        assert_eq!(cfg.distance.margin, 5);
        assert!(cfg.time.is_none());
    }

    #[test]
    fn time_section_defaults() {
        let cfg: CadenceConfig = toml::from_str(
            r#"
            [time]
            start_date = "2022-01-01"
            "#,
        )
        .unwrap();
        let time = cfg.time.unwrap();
        assert_eq!(time.start_date, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(time.periodicities, vec![15, 30, 60]);
        assert_eq!(time.margin_days, 7);
    }

    #[test]
    fn full_config() {
        let cfg: CadenceConfig = toml::from_str(
            r#"
            [distance]
            periodicities = [100, 500]
            margin = 20

            [time]
            start_date = "2023-04-01"
            periodicities = [7, 14, 30]
            margin_days = 3
            "#,
        )
        .unwrap();
        assert_eq!(cfg.distance.periodicities, vec![100, 500]);
        assert_eq!(cfg.distance.margin, 20);
        let time = cfg.time.unwrap();
        assert_eq!(time.periodicities, vec![7, 14, 30]);
        assert_eq!(time.margin_days, 3);
    }

    #[test]
    fn time_without_start_date_is_rejected() {
        let result: Result<CadenceConfig, _> = toml::from_str(
            r#"
            [time]
            periodicities = [7]
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<CadenceConfig, _> = toml::from_str(
            r#"
            [distance]
            periodicity = [50]
            "#,
        );
        assert!(result.is_err());
    }
}

//! Tracing setup for the `cadence` binary.
//!
//! Log events go to stderr. Stdout carries only command output (alert
//! messages, boundaries and schedules) so it can be piped or parsed.

use tracing_subscriber::EnvFilter;

/// Workspace crate targets that receive log output.
const CRATE_TARGETS: &[&str] = &[
    "cadence",
    "cadence_alert",
    "cadence_interval",
    "cadence_logbook",
];

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Builds one `target=level` directive per workspace crate.
fn default_directives(verbosity: u8) -> String {
    let level = level_for(verbosity);
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing from the `-v` count.
///
/// 0 maps to warn, `-v` to info, `-vv` to debug and `-vvv` or more to trace.
/// A set `RUST_LOG` takes precedence over the flag.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

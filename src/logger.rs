//! Log setup for the `knd_depth` binary.
//!
//! Everything goes to stderr: stdout carries raster and sample bytes.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt::{self, format::FmtSpan}};

/// Installs the global subscriber with `info` as the default level.
pub fn init() -> Result<(), TryInitError> {
    init_with_level(LevelFilter::INFO)
}

/// Installs the global subscriber. `RUST_LOG` overrides `default_level` when set.
///
/// Pipeline stage spans report their duration on close once debug output is on.
pub fn init_with_level(default_level: LevelFilter) -> Result<(), TryInitError> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let stage_timings = env_filter
        .max_level_hint()
        .is_some_and(|level| level >= LevelFilter::DEBUG);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(fmt::time::uptime())
        .with_span_events(if stage_timings {
            FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let _ = init();
        assert!(init_with_level(LevelFilter::DEBUG).is_err());
    }
}

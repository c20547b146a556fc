//! Logging setup (mirrors `Xevion-Banner`'s `logging::setup_logging`),
//! simplified to a single formatter: there's no web/bot subsystem left to
//! filter separately, and no alternate JSON output surface to pick between.

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Initializes the global `tracing` subscriber. Honors `RUST_LOG` when set;
/// otherwise builds a filter from `config.log_level`, quieting this crate's
/// own noisier modules the way the teacher's `EnvFilter` does for its
/// middleware/session targets.
pub fn setup_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let base_level = &config.log_level;
        EnvFilter::new(format!("warn,classgen={base_level}"))
    });

    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(filter)
        .init();
}

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Filter used when neither `RUST_LOG` nor a config override is present.
pub const DEFAULT_FILTER: &str = "info";

pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

pub fn init_with_config(config: &Config) {
    init_with_filter(&config.log_filter);
}

/// Install the global fmt subscriber. `RUST_LOG` takes precedence over `filter`.
pub fn init_with_filter(filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    // A subscriber may already be installed by a test harness or an earlier call.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

//! Shapekit Core
//!
//! Ambient functionality shared by the shapekit crates: logging setup,
//! puffin profiling, runtime configuration and the math types the
//! geometry engine is written against.

pub mod config;
pub mod logging;
pub mod math;
pub mod profiling;

pub use config::{BenchmarkMode, Config};

/// Initialize logging and, when requested by the config, profiling.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init(config: &Config) {
    logging::init_with_config(config);

    match config.benchmark {
        BenchmarkMode::Off => {}
        BenchmarkMode::On => puffin::set_scopes_on(true),
        #[cfg(feature = "profiling")]
        BenchmarkMode::WithWebserver => {
            profiling::init_profiling(profiling::ProfilingBackend::PuffinHttp)
        }
        #[cfg(not(feature = "profiling"))]
        BenchmarkMode::WithWebserver => {
            tracing::warn!("puffin webserver requested but the `profiling` feature is disabled");
            puffin::set_scopes_on(true);
        }
    }
}

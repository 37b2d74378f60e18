//! # loot-bench: Telemetry Driver
//!
//! Exercises every loot-core collection and sort strategy without any
//! interactive input, and reports what each one cost.
//!
//! ## Module Organization
//! ```text
//! loot_bench/
//! ├── lib.rs          ◄─── You are here (tracing setup & exports)
//! ├── config.rs       ◄─── Environment configuration
//! ├── generator.rs    ◄─── Deterministic loot generation
//! ├── runner.rs       ◄─── Timed sorts, search checks, chain exercise
//! └── error.rs        ◄─── ConfigError / BenchError
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod runner;

use tracing_subscriber::EnvFilter;

pub use config::BenchConfig;
pub use error::{BenchError, BenchResult, ConfigError};
pub use runner::{run, BenchReport};

/// Initializes logging to stderr.
///
/// Default: INFO, with debug for this crate. Override with `RUST_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,loot_bench=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

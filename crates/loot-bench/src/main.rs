//! # Loot Bench
//!
//! Times every sort strategy over a generated loot set and prints a JSON
//! report.
//!
//! ## Usage
//! ```bash
//! # Default: 20 component records, all strategies
//! cargo run -p loot-bench
//!
//! # Backpack-sized run, two strategies, verbose logs
//! LOOT_CAPACITY=10 LOOT_STRATEGIES=name,priority RUST_LOG=debug cargo run -p loot-bench
//! ```

use loot_bench::{init_tracing, run, BenchConfig};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = BenchConfig::load()?;
    info!(
        capacity = config.capacity,
        items = config.item_count,
        seed = config.seed,
        "Configuration loaded"
    );

    let report = run(&config)?;
    println!("{}", report.to_json()?);

    Ok(())
}

//! # Bench Runner
//!
//! Drives one full telemetry pass over loot-core.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Bench Run                                      │
//! │                                                                         │
//! │  1. Generate loot ────────────────────────────────────────────────────► │
//! │     • deterministic from the seed                                       │
//! │                                                                         │
//! │  2. For each strategy ────────────────────────────────────────────────► │
//! │     • fresh ArrayCollection with the same records                       │
//! │     • measure_sort → comparisons, swaps, elapsed                        │
//! │     • after a by-name sort: binary search every name, compare with      │
//! │       linear search                                                     │
//! │                                                                         │
//! │  3. Linked chain ─────────────────────────────────────────────────────► │
//! │     • head-insert everything, search every name, delete everything      │
//! │                                                                         │
//! │  4. Assemble BenchReport                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use loot_core::{measure, measure_sort, ArrayCollection, LinkedCollection, Record, SortReport};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::error::{BenchError, BenchResult};
use crate::generator::generate_loot;

/// Linear vs binary search totals over every record of a name-sorted array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchSummary {
    pub lookups: usize,
    pub linear_comparisons: u64,
    pub binary_comparisons: u64,
}

/// Work done against the linked collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainSummary {
    pub inserted: usize,
    pub search_comparisons: u64,
    pub deleted: usize,
    pub elapsed_micros: u64,
}

/// Everything a bench run produces.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub generated_at: DateTime<Utc>,
    pub config: BenchConfig,
    pub total_count: i64,
    pub sorts: Vec<SortReport>,
    pub search: Option<SearchSummary>,
    pub chain: ChainSummary,
}

impl BenchReport {
    /// Pretty JSON for stdout.
    pub fn to_json(&self) -> BenchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Runs every configured strategy and the chain exercise.
pub fn run(config: &BenchConfig) -> BenchResult<BenchReport> {
    config.validate()?;

    let loot = generate_loot(config.item_count, config.seed);
    info!(items = loot.len(), seed = config.seed, "Generated loot");

    let total_count: i64 = loot.iter().map(|r| i64::from(r.count())).sum();

    let mut sorts = Vec::with_capacity(config.strategies.len());
    let mut search = None;

    for &strategy in &config.strategies {
        let mut collection = fill(config.capacity, &loot)?;
        debug_assert_eq!(collection.total_count(), total_count);

        let report = measure_sort(strategy, &mut collection);
        debug!(
            %strategy,
            comparisons = report.stats.comparisons,
            swaps = report.stats.swaps,
            elapsed_us = u64::try_from(report.elapsed.as_micros()).unwrap_or(u64::MAX),
            "Sort finished"
        );

        if collection.is_sorted_by_name() {
            search = Some(check_searches(&collection)?);
        }
        sorts.push(report);
    }

    let chain = exercise_chain(&loot)?;
    info!(
        strategies = sorts.len(),
        chain_deleted = chain.deleted,
        "Bench run complete"
    );

    Ok(BenchReport {
        generated_at: Utc::now(),
        config: config.clone(),
        total_count,
        sorts,
        search,
        chain,
    })
}

fn fill(capacity: usize, loot: &[Record]) -> BenchResult<ArrayCollection> {
    let mut collection = ArrayCollection::new(capacity);
    for record in loot {
        collection.insert(record.clone())?;
    }
    Ok(collection)
}

/// Looks up every record both ways; both must land on the same name.
fn check_searches(collection: &ArrayCollection) -> BenchResult<SearchSummary> {
    let mut summary = SearchSummary {
        lookups: 0,
        linear_comparisons: 0,
        binary_comparisons: 0,
    };

    for record in collection {
        let name = record.name();
        let linear = collection.search_linear(name);
        let binary = collection.search_binary(name);

        let linear_hit = linear.index.and_then(|i| collection.get(i));
        let binary_hit = binary.index.and_then(|i| collection.get(i));
        if linear_hit.map(Record::name) != binary_hit.map(Record::name) {
            warn!(name, ?linear, ?binary, "Search mismatch");
            return Err(BenchError::SearchMismatch {
                name: name.to_string(),
            });
        }

        summary.lookups += 1;
        summary.linear_comparisons += linear.comparisons;
        summary.binary_comparisons += binary.comparisons;
    }

    debug!(
        lookups = summary.lookups,
        linear = summary.linear_comparisons,
        binary = summary.binary_comparisons,
        "Search comparison totals"
    );
    Ok(summary)
}

fn exercise_chain(loot: &[Record]) -> BenchResult<ChainSummary> {
    let timed = measure(|| -> BenchResult<(u64, usize, usize)> {
        let mut chain = LinkedCollection::new();
        chain.extend(loot.iter().cloned());
        let inserted = chain.length();

        let search_comparisons = loot
            .iter()
            .map(|r| chain.search_linear(r.name()).comparisons)
            .sum();

        let mut deleted = 0;
        for record in loot {
            chain.delete(record.name())?;
            deleted += 1;
        }
        chain.teardown();

        Ok((search_comparisons, inserted, deleted))
    });
    let (search_comparisons, inserted, deleted) = timed.value?;

    Ok(ChainSummary {
        inserted,
        search_comparisons,
        deleted,
        elapsed_micros: u64::try_from(timed.elapsed.as_micros()).unwrap_or(u64::MAX),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

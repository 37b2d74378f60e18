//! # Telemetry
//!
//! Wall-clock timing around a sort (or any closure).
//!
//! The wrapper only observes: it does not log, and it does not touch the
//! comparison or swap counts the strategy reports.
//!
//! ```text
//! start = Instant::now() ──► run sort ──► elapsed = start.elapsed()
//!                                │
//!                                └──► SortStats { comparisons, swaps }
//! ```

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::array::ArrayCollection;
use crate::sort::{SortStats, SortStrategy};

/// A value together with the time it took to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Runs `f` and measures how long it took.
///
/// ## Example
/// ```rust
/// use loot_core::telemetry::measure;
///
/// let timed = measure(|| 2 + 2);
/// assert_eq!(timed.value, 4);
/// ```
pub fn measure<T, F>(f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Outcome of one timed sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortReport {
    pub strategy: SortStrategy,
    #[serde(flatten)]
    pub stats: SortStats,
    #[serde(rename = "elapsed_micros", serialize_with = "serialize_micros")]
    pub elapsed: Duration,
}

fn serialize_micros<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX))
}

/// Sorts `collection` with `strategy` and times the call.
///
/// ## Example
/// ```rust
/// use loot_core::telemetry::measure_sort;
/// use loot_core::{ArrayCollection, Record, SortStrategy};
///
/// let mut pack = ArrayCollection::backpack();
/// pack.insert(Record::new("b", "x", 1)).unwrap();
/// pack.insert(Record::new("a", "x", 1)).unwrap();
///
/// let report = measure_sort(SortStrategy::BubbleByName, &mut pack);
/// assert_eq!(report.stats.comparisons, 1);
/// assert!(pack.is_sorted_by_name());
/// ```
pub fn measure_sort(strategy: SortStrategy, collection: &mut ArrayCollection) -> SortReport {
    let timed = measure(|| collection.apply_strategy(strategy));
    SortReport {
        strategy,
        stats: timed.value,
        elapsed: timed.elapsed,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;

    #[test]
    fn test_measure_passes_value_through() {
        let timed = measure(|| "done");
        assert_eq!(timed.value, "done");
    }

    #[test]
    fn test_measure_sees_elapsed_time() {
        let timed = measure(|| std::thread::sleep(Duration::from_millis(2)));
        assert!(timed.elapsed >= Duration::from_millis(2));
    }

    #[test]
    fn test_measured_stats_match_unmeasured() {
        let records = vec![
            Record::component("a", "z", 1, 2),
            Record::component("b", "y", 1, 7),
            Record::component("c", "x", 1, 5),
        ];

        for strategy in SortStrategy::ALL {
            let mut plain = ArrayCollection::component_kit();
            let mut timed = ArrayCollection::component_kit();
            for record in &records {
                plain.insert(record.clone()).unwrap();
                timed.insert(record.clone()).unwrap();
            }

            let expected = plain.apply_strategy(strategy);
            let report = measure_sort(strategy, &mut timed);

            assert_eq!(report.strategy, strategy);
            assert_eq!(report.stats, expected);
            assert_eq!(timed, plain);
        }
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = SortReport {
            strategy: SortStrategy::InsertionByCategory,
            stats: SortStats {
                comparisons: 4,
                swaps: 1,
            },
            elapsed: Duration::from_micros(15),
        };
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["strategy"], "insertion_by_category");
        assert_eq!(json["comparisons"], 4);
        assert_eq!(json["swaps"], 1);
        assert_eq!(json["elapsed_micros"], 15);
    }
}

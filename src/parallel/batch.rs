//! Parallel batch scoring.
//!
//! Records are split into chunks with [batch_ranges]; each chunk is scored
//! on the worker pool and results keep input order.

use rayon::prelude::*;
use serde::Serialize;

use crate::combat::engine::CombatPower;
use crate::data::record::BattleRecord;
use crate::data::validate::validate_record;
use crate::estimator::Estimator;
use crate::evaluation::assign_evaluations;
use crate::parallel::pool::WorkerPool;

/// Records scored between progress log lines.
const CHUNK_SIZE: usize = 1024;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// Position of the record in the input.
    pub index: usize,
    pub level_key: String,
    pub combat_power: CombatPower,
    pub validation_errors: usize,
}

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
///
/// # Example
/// ```
/// # use lysk_cp::parallel::batch_ranges;
/// let ranges = batch_ranges(100, 4);
/// assert_eq!(ranges, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = base + if i < remainder { 1 } else { 0 };
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Scores and validates every record on `pool`.
pub fn score_batch(records: &[BattleRecord], pool: &WorkerPool) -> Vec<BatchEntry> {
    let estimator = Estimator::new();
    let chunks = batch_ranges(records.len(), records.len().div_ceil(CHUNK_SIZE));

    pool.install(|| {
        let mut entries = Vec::with_capacity(records.len());
        for (start, end) in chunks {
            let scored: Vec<BatchEntry> = records[start..end]
                .par_iter()
                .enumerate()
                .map(|(offset, record)| BatchEntry {
                    index: start + offset,
                    level_key: record.level_key(),
                    combat_power: estimator.estimate(record),
                    validation_errors: validate_record(record).error_count(),
                })
                .collect();
            entries.extend(scored);
            tracing::debug!(done = end, total = records.len(), "scored batch chunk");
        }
        entries
    })
}

/// Labels every entry against the others sharing its level key.
pub fn evaluate_batch(entries: &mut [BatchEntry]) {
    let mut keyed: Vec<(String, CombatPower)> = entries
        .iter_mut()
        .map(|entry| {
            (
                entry.level_key.clone(),
                std::mem::take(&mut entry.combat_power),
            )
        })
        .collect();
    assign_evaluations(&mut keyed);
    for (entry, (_, power)) in entries.iter_mut().zip(keyed) {
        entry.combat_power = power;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(attack: &str, level: &str) -> BattleRecord {
        BattleRecord {
            attack: attack.into(),
            hp: "50000".into(),
            defense: "2000".into(),
            matching: "顺".into(),
            matching_buff: "0".into(),
            crit_rate: "50".into(),
            weaken_boost: "50".into(),
            crit_dmg: "200".into(),
            companion: "光猎".into(),
            set_card: "末夜".into(),
            stage: "II".into(),
            weapon: "专武".into(),
            level_number: level.into(),
            ..BattleRecord::default()
        }
    }

    #[test]
    fn batch_ranges_even_split() {
        let r = batch_ranges(100, 4);
        assert_eq!(r, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
    }

    #[test]
    fn batch_ranges_with_remainder() {
        let r = batch_ranges(10, 3);
        assert_eq!(r, vec![(0, 4), (4, 7), (7, 10)]);
    }

    #[test]
    fn batch_ranges_more_batches_than_items() {
        let r = batch_ranges(3, 10);
        assert_eq!(r, vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn batch_ranges_empty() {
        assert!(batch_ranges(0, 5).is_empty());
        assert!(batch_ranges(10, 0).is_empty());
    }

    #[test]
    fn batch_keeps_input_order_and_matches_single_estimates() {
        let records: Vec<BattleRecord> = (1..=20)
            .map(|i| record(&(i * 500).to_string(), "10"))
            .collect();
        let entries = score_batch(&records, &WorkerPool::with_workers(3));
        assert_eq!(entries.len(), records.len());
        for (i, entry) in entries.iter().enumerate() {
            assert_eq!(entry.index, i);
            assert_eq!(entry.combat_power, Estimator.estimate(&records[i]));
        }
    }

    #[test]
    fn validation_errors_are_counted() {
        let entries = score_batch(&[record("0", "10")], &WorkerPool::default());
        assert_eq!(entries[0].validation_errors, 1);
    }

    #[test]
    fn evaluation_labels_land_on_entries() {
        let records: Vec<BattleRecord> = (1..=8)
            .map(|i| record(&(i * 1000).to_string(), "10"))
            .collect();
        let mut entries = score_batch(&records, &WorkerPool::default());
        evaluate_batch(&mut entries);
        assert_eq!(entries[0].combat_power.evaluation.as_deref(), Some("极限"));
        assert_eq!(entries[7].combat_power.evaluation.as_deref(), Some("溢出"));
        assert_eq!(entries[0].index, 0);
    }
}

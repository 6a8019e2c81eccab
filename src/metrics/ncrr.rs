//! Normalized Cumulative Reciprocal Rank.

use super::{is_relevant, RankingInput, RankingMetric, ALL_ITEMS};
use crate::error::Result;

/// Sum of reciprocal ranks of every ranked positive, normalized by the sum obtained when
/// all positives are ranked first.
///
/// The whole prediction list is scored; `k` only labels the metric.
#[derive(Debug, Clone, Copy)]
pub struct Ncrr {
    k: i32,
}

impl Ncrr {
    pub fn new(k: i32) -> Self {
        Self { k }
    }
}

impl Default for Ncrr {
    fn default() -> Self {
        Self::new(ALL_ITEMS)
    }
}

impl RankingMetric for Ncrr {
    fn name(&self) -> String {
        format!("NCRR@{}", self.k)
    }

    fn k(&self) -> i32 {
        self.k
    }

    fn compute(&self, input: &RankingInput<'_>) -> Result<f64> {
        let positives = input.gt_pos.iter().filter(|&&rel| is_relevant(rel)).count();
        let icrr: f64 = (1..=positives).map(|rank| 1.0 / rank as f64).sum();

        let crr: f64 = input
            .pd_rank
            .iter()
            .enumerate()
            .filter(|(_, &item)| input.gt_pos.get(item).is_some_and(|&rel| is_relevant(rel)))
            .map(|(i, _)| 1.0 / (i + 1) as f64)
            .sum();

        Ok(crr / icrr)
    }
}

//! Reciprocal rank of the first relevant prediction.

use super::{is_relevant, RankingInput, RankingMetric, ALL_ITEMS};
use crate::error::{RankingError, Result};

/// Mean Reciprocal Rank for a single query: `1 / rank` of the first ranked positive.
/// Averaging across queries is left to the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mrr;

impl Mrr {
    pub fn new() -> Self {
        Self
    }
}

impl RankingMetric for Mrr {
    fn name(&self) -> String {
        "MRR".to_string()
    }

    fn k(&self) -> i32 {
        ALL_ITEMS
    }

    /// Fails with [`RankingError::NoMatch`] when no ranked item is a positive.
    fn compute(&self, input: &RankingInput<'_>) -> Result<f64> {
        let first = input
            .pd_rank
            .iter()
            .position(|&item| input.gt_pos.get(item).is_some_and(|&rel| is_relevant(rel)))
            .ok_or(RankingError::NoMatch)?;
        Ok(1.0 / (first + 1) as f64)
    }
}

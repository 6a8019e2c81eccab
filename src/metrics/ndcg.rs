//! Normalized Discounted Cumulative Gain.
//!
//! DCG@k = Σ (2^rel_i - 1) / log2(i + 2) over the first k ranked items (0-indexed `i`).
//! NDCG@k = DCG@k of the prediction / DCG@k of the ideal ordering.

use super::{relevance_of, top_k, RankingInput, RankingMetric, ALL_ITEMS};
use crate::error::Result;

/// Discounted cumulative gain of `rank` against graded relevance `gt_pos`.
pub fn dcg(gt_pos: &[f64], rank: &[usize], k: i32) -> Result<f64> {
    let mut score = 0.0;
    for (i, &item) in top_k(rank, k).iter().enumerate() {
        let gain = relevance_of(gt_pos, item)?.exp2() - 1.0;
        score += gain / ((i + 2) as f64).log2();
    }
    Ok(score)
}

/// DCG of the best possible ordering: all items sorted by descending relevance.
fn ideal_dcg(gt_pos: &[f64], k: i32) -> Result<f64> {
    let mut ideal: Vec<usize> = (0..gt_pos.len()).collect();
    ideal.sort_by(|&a, &b| gt_pos[b].total_cmp(&gt_pos[a]));
    dcg(gt_pos, &ideal, k)
}

#[derive(Debug, Clone, Copy)]
pub struct Ndcg {
    k: i32,
}

impl Ndcg {
    pub fn new(k: i32) -> Self {
        Self { k }
    }
}

impl Default for Ndcg {
    fn default() -> Self {
        Self::new(ALL_ITEMS)
    }
}

impl RankingMetric for Ndcg {
    fn name(&self) -> String {
        format!("NDCG@{}", self.k)
    }

    fn k(&self) -> i32 {
        self.k
    }

    /// Zero ideal DCG (no relevant item) is not guarded and yields NaN.
    fn compute(&self, input: &RankingInput<'_>) -> Result<f64> {
        let dcg = dcg(input.gt_pos, input.pd_rank, self.k)?;
        let idcg = ideal_dcg(input.gt_pos, self.k)?;
        Ok(dcg / idcg)
    }
}

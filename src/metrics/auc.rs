//! Area under the ROC curve in its pairwise form.

use super::{is_relevant, RankingInput, RankingMetric, ALL_ITEMS};
use crate::error::{RankingError, Result};

/// Probability that a positive item scores strictly above a negative item.
///
/// Needs `pd_scores` and `gt_neg` in the input, both the same length as `gt_pos`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Auc;

impl Auc {
    pub fn new() -> Self {
        Self
    }
}

fn masked_scores(scores: &[f64], mask: &[f64]) -> Vec<f64> {
    scores
        .iter()
        .zip(mask)
        .filter(|(_, &flag)| is_relevant(flag))
        .map(|(&score, _)| score)
        .collect()
}

impl RankingMetric for Auc {
    fn name(&self) -> String {
        "AUC".to_string()
    }

    fn k(&self) -> i32 {
        ALL_ITEMS
    }

    /// Averages, over positives, the fraction of negatives each one beats. Ties do not
    /// count as wins. No negatives or no positives gives NaN.
    fn compute(&self, input: &RankingInput<'_>) -> Result<f64> {
        let scores = input
            .pd_scores
            .ok_or_else(|| RankingError::InvalidInput("AUC requires pd_scores".to_string()))?;
        let gt_neg = input
            .gt_neg
            .ok_or_else(|| RankingError::InvalidInput("AUC requires gt_neg".to_string()))?;
        if scores.len() != input.gt_pos.len() || gt_neg.len() != input.gt_pos.len() {
            return Err(RankingError::InvalidInput(format!(
                "AUC length mismatch: pd_scores={}, gt_pos={}, gt_neg={}",
                scores.len(),
                input.gt_pos.len(),
                gt_neg.len()
            )));
        }

        let positives = masked_scores(scores, input.gt_pos);
        let mut negatives = masked_scores(scores, gt_neg);
        let n_neg = negatives.len() as f64;
        // NaN is never strictly exceeded; dropping it keeps the slice partitioned for `<`.
        negatives.retain(|neg| !neg.is_nan());
        negatives.sort_by(f64::total_cmp);

        let total: f64 = positives
            .iter()
            .map(|&pos| negatives.partition_point(|&neg| neg < pos) as f64 / n_neg)
            .sum();

        Ok(total / positives.len() as f64)
    }
}

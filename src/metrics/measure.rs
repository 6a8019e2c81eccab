//! Set-based measures at K: Precision, Recall, and F1, all derived from the same
//! true-positive counts.

use super::{relevance_of, top_k, RankingInput, RankingMetric, ALL_ITEMS};
use crate::error::Result;

/// Counts over the top-K prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasureCounts {
    /// Relevance mass of the predicted items (count of hits for binary relevance).
    pub tp: f64,
    /// Total relevance mass of the ground truth (number of positives for binary relevance).
    pub tp_fn: f64,
    /// Number of distinct predicted items.
    pub tp_fp: f64,
}

impl MeasureCounts {
    /// `tp / tp_fp`; NaN when nothing was predicted.
    pub fn precision(&self) -> f64 {
        self.tp / self.tp_fp
    }

    /// `tp / tp_fn`; NaN or infinity when there are no positives.
    pub fn recall(&self) -> f64 {
        self.tp / self.tp_fn
    }

    /// Harmonic mean of precision and recall, 0 when their sum is not positive.
    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        }
    }
}

/// Mark the top-`k` predicted items in an indicator over the `gt_pos` index space and
/// count hits, ground-truth mass, and predictions. Repeated ids are counted once.
pub fn measure_at_k(gt_pos: &[f64], pd_rank: &[usize], k: i32) -> Result<MeasureCounts> {
    let mut predicted = vec![false; gt_pos.len()];
    for &item in top_k(pd_rank, k) {
        relevance_of(gt_pos, item)?;
        predicted[item] = true;
    }

    let tp: f64 = gt_pos
        .iter()
        .zip(&predicted)
        .filter(|(_, &hit)| hit)
        .map(|(&rel, _)| rel)
        .sum();
    let tp_fn: f64 = gt_pos.iter().sum();
    let tp_fp = predicted.iter().filter(|&&hit| hit).count() as f64;

    Ok(MeasureCounts { tp, tp_fn, tp_fp })
}

macro_rules! measure_metric {
    ($(#[$doc:meta])* $ty:ident, $label:literal, $score:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $ty {
            k: i32,
        }

        impl $ty {
            pub fn new(k: i32) -> Self {
                Self { k }
            }

            pub fn counts(&self, input: &RankingInput<'_>) -> Result<MeasureCounts> {
                measure_at_k(input.gt_pos, input.pd_rank, self.k)
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new(ALL_ITEMS)
            }
        }

        impl RankingMetric for $ty {
            fn name(&self) -> String {
                format!(concat!($label, "@{}"), self.k)
            }

            fn k(&self) -> i32 {
                self.k
            }

            fn compute(&self, input: &RankingInput<'_>) -> Result<f64> {
                Ok(self.counts(input)?.$score())
            }
        }
    };
}

measure_metric!(
    /// Precision@K: fraction of the top-K predictions that are relevant.
    Precision,
    "Precision",
    precision
);
measure_metric!(
    /// Recall@K: fraction of the ground-truth positives found in the top-K.
    Recall,
    "Recall",
    recall
);
measure_metric!(
    /// F1@K: harmonic mean of Precision@K and Recall@K.
    FMeasure,
    "F1",
    f1
);

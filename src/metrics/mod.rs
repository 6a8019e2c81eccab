//! Ranking metrics: NDCG, NCRR, MRR, Precision/Recall/F1@K, and AUC.
//!
//! Every metric takes a [`RankingInput`] (ground-truth vectors indexed by item id plus
//! the predicted ranking) and returns one score. Zero denominators are not guarded:
//! a metric over degenerate input returns NaN or infinity, except F1 which falls back
//! to 0 and MRR which returns [`RankingError::NoMatch`](crate::RankingError::NoMatch).

pub mod auc;
pub mod measure;
pub mod mrr;
pub mod ncrr;
pub mod ndcg;

pub use auc::Auc;
pub use measure::{measure_at_k, FMeasure, MeasureCounts, Precision, Recall};
pub use mrr::Mrr;
pub use ncrr::Ncrr;
pub use ndcg::{dcg, Ndcg};

use crate::error::{RankingError, Result};
use serde::Deserialize;
use std::fmt;

/// Truncation depth meaning "use the whole ranking".
pub const ALL_ITEMS: i32 = -1;

/// Per-query inputs shared by every metric. Fields a metric does not need are ignored.
#[derive(Debug, Clone, Copy)]
pub struct RankingInput<'a> {
    /// Relevance per item id; `> 0` marks a ground-truth positive.
    pub gt_pos: &'a [f64],
    /// Negative-item mask per item id (AUC only).
    pub gt_neg: Option<&'a [f64]>,
    /// Predicted item ids, most relevant first.
    pub pd_rank: &'a [usize],
    /// Predicted score per item id (AUC only).
    pub pd_scores: Option<&'a [f64]>,
}

impl<'a> RankingInput<'a> {
    pub fn new(gt_pos: &'a [f64], pd_rank: &'a [usize]) -> Self {
        Self {
            gt_pos,
            gt_neg: None,
            pd_rank,
            pd_scores: None,
        }
    }

    pub fn with_negatives(mut self, gt_neg: &'a [f64]) -> Self {
        self.gt_neg = Some(gt_neg);
        self
    }

    pub fn with_scores(mut self, pd_scores: &'a [f64]) -> Self {
        self.pd_scores = Some(pd_scores);
        self
    }

    /// True if at least one item is a ground-truth positive.
    pub fn has_positives(&self) -> bool {
        self.gt_pos.iter().any(|&rel| is_relevant(rel))
    }
}

/// A ranking quality metric.
pub trait RankingMetric: Send + Sync {
    /// Display name, e.g. `NDCG@10`.
    fn name(&self) -> String;

    /// Truncation depth; `<= 0` means the whole ranking.
    fn k(&self) -> i32;

    fn compute(&self, input: &RankingInput<'_>) -> Result<f64>;
}

/// First `k` items of `rank`, or all of them when `k <= 0`.
pub fn top_k(rank: &[usize], k: i32) -> &[usize] {
    if k > 0 {
        &rank[..rank.len().min(k as usize)]
    } else {
        rank
    }
}

/// Binary relevance: any strictly positive value counts.
pub fn is_relevant(value: f64) -> bool {
    value > 0.0
}

/// Relevance of `item`, or an error if the id is outside the catalogue.
pub(crate) fn relevance_of(gt_pos: &[f64], item: usize) -> Result<f64> {
    gt_pos.get(item).copied().ok_or_else(|| {
        RankingError::InvalidInput(format!(
            "item {} out of range for {} ground-truth items",
            item,
            gt_pos.len()
        ))
    })
}

/// Metric selector used by configuration and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Ndcg,
    Ncrr,
    Mrr,
    Precision,
    Recall,
    F1,
    Auc,
}

impl MetricKind {
    pub const ALL: [MetricKind; 7] = [
        MetricKind::Ndcg,
        MetricKind::Ncrr,
        MetricKind::Mrr,
        MetricKind::Precision,
        MetricKind::Recall,
        MetricKind::F1,
        MetricKind::Auc,
    ];

    /// Whether the metric is parameterized by a truncation depth.
    pub fn uses_k(self) -> bool {
        !matches!(self, MetricKind::Mrr | MetricKind::Auc)
    }

    /// Build the metric; `k` is ignored by MRR and AUC.
    pub fn build(self, k: i32) -> Box<dyn RankingMetric> {
        match self {
            MetricKind::Ndcg => Box::new(Ndcg::new(k)),
            MetricKind::Ncrr => Box::new(Ncrr::new(k)),
            MetricKind::Mrr => Box::new(Mrr::new()),
            MetricKind::Precision => Box::new(Precision::new(k)),
            MetricKind::Recall => Box::new(Recall::new(k)),
            MetricKind::F1 => Box::new(FMeasure::new(k)),
            MetricKind::Auc => Box::new(Auc::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKind::Ndcg => "ndcg",
            MetricKind::Ncrr => "ncrr",
            MetricKind::Mrr => "mrr",
            MetricKind::Precision => "precision",
            MetricKind::Recall => "recall",
            MetricKind::F1 => "f1",
            MetricKind::Auc => "auc",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MetricKind {
    type Err = RankingError;

    fn from_str(s: &str) -> Result<Self> {
        MetricKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RankingError::InvalidInput(format!("unknown metric: {}", s)))
    }
}

/// Build one metric per (kind, k) pair. Metrics without a depth are built once.
pub fn build_metrics(kinds: &[MetricKind], ks: &[i32]) -> Vec<Box<dyn RankingMetric>> {
    let mut metrics = Vec::new();
    for &kind in kinds {
        if kind.uses_k() {
            for &k in ks {
                metrics.push(kind.build(k));
            }
        } else {
            metrics.push(kind.build(ALL_ITEMS));
        }
    }
    metrics
}

//! Run metrics over a set of eval queries and average the per-query scores.

use crate::eval::EvalQuery;
use crate::metrics::RankingMetric;
use serde::Serialize;
use std::fmt;

/// Harness options.
#[derive(Debug, Clone, Copy)]
pub struct EvalOptions {
    /// Skip queries with no ground-truth positive instead of scoring them.
    pub skip_without_positives: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            skip_without_positives: true,
        }
    }
}

/// Averaged score of one metric across queries.
#[derive(Debug, Clone, Serialize)]
pub struct MetricSummary {
    pub name: String,
    /// Mean over evaluated queries; NaN if none were evaluated or a score was NaN.
    pub mean: f64,
    /// Queries that produced a score.
    pub evaluated: usize,
    /// Queries where the metric returned an error (e.g. MRR without a match).
    pub failed: usize,
    /// Queries skipped before scoring.
    pub skipped: usize,
}

impl fmt::Display for MetricSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<14} {:.4}  (evaluated: {}, failed: {}, skipped: {})",
            self.name, self.mean, self.evaluated, self.failed, self.skipped
        )
    }
}

/// Score every query with every metric.
///
/// A metric error on one query is logged and counted in [`MetricSummary::failed`]; it
/// does not abort the run.
pub fn evaluate(
    metrics: &[Box<dyn RankingMetric>],
    queries: &[EvalQuery],
    options: EvalOptions,
) -> Vec<MetricSummary> {
    let scored: Vec<&EvalQuery> = queries
        .iter()
        .filter(|q| {
            let keep = !options.skip_without_positives || q.as_input().has_positives();
            if !keep {
                log::debug!("Skipping query '{}': no ground-truth positives", q.query_id);
            }
            keep
        })
        .collect();
    let skipped = queries.len() - scored.len();

    metrics
        .iter()
        .map(|metric| {
            let name = metric.name();
            let mut sum = 0.0;
            let mut evaluated = 0;
            let mut failed = 0;
            for query in &scored {
                match metric.compute(&query.as_input()) {
                    Ok(score) => {
                        log::debug!("{} for '{}': {}", name, query.query_id, score);
                        sum += score;
                        evaluated += 1;
                    }
                    Err(e) => {
                        log::warn!("{} failed for '{}': {}", name, query.query_id, e);
                        failed += 1;
                    }
                }
            }
            MetricSummary {
                name,
                mean: sum / evaluated as f64,
                evaluated,
                failed,
                skipped,
            }
        })
        .collect()
}

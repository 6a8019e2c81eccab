//! Eval query type: one user's (or query's) ground truth and predicted ranking.

use crate::error::{RankingError, Result};
use crate::metrics::RankingInput;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Single evaluation record, as read from a queries JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalQuery {
    /// Identifier used in log output (user id, query text, ...).
    #[serde(default)]
    pub query_id: String,
    /// Relevance per item id; `> 0` marks a ground-truth positive.
    pub gt_pos: Vec<f64>,
    /// Optional: negative-item mask per item id (needed for AUC).
    #[serde(default)]
    pub gt_neg: Option<Vec<f64>>,
    /// Predicted item ids, most relevant first.
    pub pd_rank: Vec<usize>,
    /// Optional: predicted score per item id (needed for AUC).
    #[serde(default)]
    pub pd_scores: Option<Vec<f64>>,
}

impl EvalQuery {
    /// Borrow this record as metric input.
    pub fn as_input(&self) -> RankingInput<'_> {
        RankingInput {
            gt_pos: &self.gt_pos,
            gt_neg: self.gt_neg.as_deref(),
            pd_rank: &self.pd_rank,
            pd_scores: self.pd_scores.as_deref(),
        }
    }
}

/// Load a JSON array of eval queries. An empty array is rejected.
pub fn load_queries(path: &Path) -> Result<Vec<EvalQuery>> {
    let json = std::fs::read_to_string(path)?;
    let queries: Vec<EvalQuery> = serde_json::from_str(&json)?;
    if queries.is_empty() {
        return Err(RankingError::InvalidInput(format!(
            "No queries in {}",
            path.display()
        )));
    }
    log::debug!("Loaded {} eval queries from {}", queries.len(), path.display());
    Ok(queries)
}

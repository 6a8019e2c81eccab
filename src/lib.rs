pub mod config;
pub mod error;
pub mod eval;
pub mod metrics;

pub use config::Config;
pub use error::{RankingError, Result};
pub use metrics::{
    measure_at_k, top_k, Auc, FMeasure, MeasureCounts, MetricKind, Mrr, Ncrr, Ndcg, Precision,
    RankingInput, RankingMetric, Recall, ALL_ITEMS,
};

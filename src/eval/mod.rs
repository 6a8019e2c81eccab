//! Evaluation framework: per-query records, the averaging harness, and its report.

pub mod query;
pub mod report;

pub use query::{load_queries, EvalQuery};
pub use report::{evaluate, EvalOptions, MetricSummary};

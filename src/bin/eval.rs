//! Evaluation CLI: score precomputed rankings and report the mean of each metric.

use clap::Parser;
use rankmetrics::{
    eval::{evaluate, load_queries},
    metrics::{build_metrics, MetricKind},
    Config,
};
use std::path::PathBuf;

/// Ranking evaluation: read per-query rankings and report metrics.
#[derive(Parser, Debug)]
#[command(name = "eval")]
struct Args {
    /// Path to eval queries JSON (default: eval_queries.json).
    #[arg(long, default_value = "eval_queries.json")]
    queries: PathBuf,

    /// Metric to compute (repeatable; overrides metrics.enabled).
    #[arg(long = "metric")]
    metrics: Vec<MetricKind>,

    /// Top-K depth (repeatable; overrides metrics.k, -1 for the whole ranking).
    #[arg(long = "k", allow_negative_numbers = true)]
    ks: Vec<i32>,

    /// Print the summaries as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.report.log_level.as_str()),
    )
    .init();

    match &config.source {
        Some(path) => log::info!("Loaded config from {}", path.display()),
        None => log::debug!("No config file found, using default config"),
    }

    let kinds = if args.metrics.is_empty() {
        config.metrics.enabled.clone()
    } else {
        args.metrics
    };
    let ks = if args.ks.is_empty() {
        config.metrics.k.clone()
    } else {
        args.ks
    };

    let queries = load_queries(&args.queries)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", args.queries.display(), e))?;
    let metrics = build_metrics(&kinds, &ks);
    if metrics.is_empty() {
        anyhow::bail!("No metrics selected");
    }

    log::info!(
        "Evaluating {} metrics on {} queries",
        metrics.len(),
        queries.len()
    );

    let summaries = evaluate(&metrics, &queries, config.eval_options());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        println!("=== Evaluation Results ===");
        for summary in &summaries {
            println!("{}", summary);
        }
    }

    Ok(())
}

//! fakescore entrypoint: score one event-log batch against a trained model
//! and write per-user fake probabilities.

use anyhow::Context;
use clap::Parser;
use fakescore::{
    config::AppConfig,
    logging::StructuredLogger,
    scoring::{self, RunPaths},
};
use std::path::PathBuf;
use tracing::info;

/// Event-log based fake-account classifier.
#[derive(Parser)]
#[command(name = "fakescore", about = "Classify users as fake or genuine from event logs")]
struct Args {
    /// Path to the dataset to classify
    #[arg(long)]
    data: PathBuf,

    /// Path to the model file
    #[arg(long)]
    model: PathBuf,

    /// Path to the output file
    #[arg(long)]
    output_file: PathBuf,

    /// Optional JSON config: threshold, absent-feature policy, logging
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };
    StructuredLogger::init(config.log.json, &config.log.level);

    let paths = RunPaths {
        data: args.data,
        model: args.model,
        output: args.output_file,
    };
    let report = scoring::run(&paths, &config).context("classification run failed")?;
    info!(
        users = report.users_scored,
        threshold = report.threshold,
        "run complete"
    );
    Ok(())
}

//! One sequential batch run: load model → read events → compute features →
//! align to the model schema → score → write results. Every failure along
//! the way is fatal; the output file only exists if scoring succeeded.

use crate::config::AppConfig;
use crate::dataset::{self, ScoredUser};
use crate::error::Result;
use crate::features::compute_features;
use crate::model::GbdtModel;
use std::path::PathBuf;
use tracing::info;

/// Input and output locations for one run.
#[derive(Debug, Clone)]
pub struct RunPaths {
    pub data: PathBuf,
    pub model: PathBuf,
    pub output: PathBuf,
}

/// Summary of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub users_scored: usize,
    pub threshold: f32,
    /// Share of labeled users the threshold decision got right; `None`
    /// when the input had no labels.
    pub labeled_accuracy: Option<f32>,
}

pub fn run(paths: &RunPaths, config: &AppConfig) -> Result<RunReport> {
    let model = GbdtModel::load(&paths.model)?;
    info!(
        path = %paths.model.display(),
        trees = model.trees.len(),
        features = model.feature_names.len(),
        "model loaded"
    );

    let table = dataset::read_events(&paths.data)?;
    info!(path = %paths.data.display(), rows = table.len(), "event table loaded");

    let (features, ground_truth) = compute_features(&table);
    let matrix = features.aligned_matrix(&model.feature_names, config.absent_feature)?;
    let probs = model.predict_proba(&matrix)?;

    let scores: Vec<ScoredUser> = features
        .users
        .iter()
        .zip(&probs)
        .map(|(user, &p)| ScoredUser {
            user_id: user.clone(),
            is_fake_probability: p,
        })
        .collect();
    dataset::write_scores(&paths.output, &scores)?;
    info!(path = %paths.output.display(), users = scores.len(), "result saved");
    info!(threshold = config.decision_threshold, "decision threshold");

    let labeled_accuracy = ground_truth
        .as_deref()
        .and_then(|labels| accuracy(&probs, labels, config.decision_threshold));
    if let Some(acc) = labeled_accuracy {
        info!(
            accuracy = acc,
            labeled = scores.len(),
            "accuracy at threshold against supplied labels"
        );
    }

    Ok(RunReport {
        users_scored: scores.len(),
        threshold: config.decision_threshold,
        labeled_accuracy,
    })
}

fn accuracy(probs: &[f32], labels: &[u8], threshold: f32) -> Option<f32> {
    if labels.is_empty() {
        return None;
    }
    let correct = probs
        .iter()
        .zip(labels)
        .filter(|(p, &y)| (**p >= threshold) == (y == 1))
        .count();
    Some(correct as f32 / labels.len() as f32)
}

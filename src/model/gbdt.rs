//! Gradient-boosted decision-tree classifier loaded from a JSON model file.
//! Input: users × features f32 matrix; output: positive-class probability
//! per row. NaN cells follow each node's default direction.

use crate::error::{ClassifyError, Result};
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Binary classifier: an additive forest over a declared feature schema.
/// Probability = sigmoid(base_score + Σ tree leaf values). An empty forest
/// scores sigmoid(base_score) for every row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GbdtModel {
    /// Training-time column order; the caller aligns its matrix to this.
    pub feature_names: Vec<String>,
    /// Logit-space bias added to every margin.
    #[serde(default)]
    pub base_score: f32,
    pub trees: Vec<Tree>,
}

/// One regression tree in flattened-array form. Node 0 is the root; a
/// `left_children` entry of -1 marks a leaf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tree {
    pub left_children: Vec<i32>,
    pub right_children: Vec<i32>,
    pub split_features: Vec<u32>,
    pub thresholds: Vec<f32>,
    /// Direction taken when the split feature is NaN.
    pub default_left: Vec<bool>,
    pub leaf_values: Vec<f32>,
}

fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

impl Tree {
    fn len(&self) -> usize {
        self.left_children.len()
    }

    fn leaf_value(&self, row: ArrayView1<f32>) -> f32 {
        let mut node = 0usize;
        while self.left_children[node] >= 0 {
            let x = row[self.split_features[node] as usize];
            let go_left = if x.is_nan() {
                self.default_left[node]
            } else {
                x < self.thresholds[node]
            };
            node = if go_left {
                self.left_children[node] as usize
            } else {
                self.right_children[node] as usize
            };
        }
        self.leaf_values[node]
    }
}

impl GbdtModel {
    /// Deserialize and structurally validate a model file. Corrupt or
    /// inconsistent models fail here, before any data is read.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| ClassifyError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let model: GbdtModel = serde_json::from_reader(BufReader::new(file))?;
        model.validate().map_err(|reason| ClassifyError::InvalidModel {
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(model)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.feature_names.is_empty() {
            return Err("feature_names is empty".into());
        }
        for (t, tree) in self.trees.iter().enumerate() {
            let n = tree.len();
            if n == 0 {
                return Err(format!("tree {t} has no nodes"));
            }
            if [
                tree.right_children.len(),
                tree.split_features.len(),
                tree.thresholds.len(),
                tree.default_left.len(),
                tree.leaf_values.len(),
            ]
            .iter()
            .any(|&len| len != n)
            {
                return Err(format!("tree {t} node arrays disagree in length"));
            }
            for i in 0..n {
                let (l, r) = (tree.left_children[i], tree.right_children[i]);
                if (l < 0) != (r < 0) {
                    return Err(format!("tree {t} node {i} is half leaf"));
                }
                if l < 0 {
                    continue;
                }
                // Children must point forward so traversal terminates.
                let (l, r) = (l as usize, r as usize);
                if l <= i || r <= i || l >= n || r >= n {
                    return Err(format!("tree {t} node {i} child out of order"));
                }
                if tree.split_features[i] as usize >= self.feature_names.len() {
                    return Err(format!("tree {t} node {i} split feature out of range"));
                }
            }
        }
        Ok(())
    }

    /// Positive-class ("fake") probability per matrix row.
    pub fn predict_proba(&self, matrix: &Array2<f32>) -> Result<Vec<f32>> {
        if matrix.ncols() != self.feature_names.len() {
            return Err(ClassifyError::FeatureWidth {
                expected: self.feature_names.len(),
                actual: matrix.ncols(),
            });
        }
        Ok(matrix
            .rows()
            .into_iter()
            .map(|row| {
                let margin: f32 = self.base_score
                    + self.trees.iter().map(|t| t.leaf_value(row)).sum::<f32>();
                sigmoid(margin)
            })
            .collect())
    }
}

//! GBDT model: deserialization, structural validation, scoring, and
//! missing-value routing.

use fakescore::error::ClassifyError;
use fakescore::model::{GbdtModel, Tree};
use ndarray::arr2;

fn names(n: &[&str]) -> Vec<String> {
    n.iter().map(|s| s.to_string()).collect()
}

/// Single split on `feature`, then two leaves.
fn stump(feature: u32, threshold: f32, default_left: bool, left: f32, right: f32) -> Tree {
    Tree {
        left_children: vec![1, -1, -1],
        right_children: vec![2, -1, -1],
        split_features: vec![feature, 0, 0],
        thresholds: vec![threshold, 0.0, 0.0],
        default_left: vec![default_left, false, false],
        leaf_values: vec![0.0, left, right],
    }
}

#[test]
fn empty_forest_scores_sigmoid_of_base() {
    let model = GbdtModel {
        feature_names: names(&["EventCount", "click"]),
        base_score: 0.0,
        trees: Vec::new(),
    };
    let m = arr2(&[[3.0, 1.0], [7.0, 0.25]]);
    let probs = model.predict_proba(&m).unwrap();
    assert_eq!(probs, vec![0.5, 0.5]);
}

#[test]
fn base_score_shifts_probability() {
    let model = GbdtModel {
        feature_names: names(&["x"]),
        base_score: 1.0,
        trees: Vec::new(),
    };
    let probs = model.predict_proba(&arr2(&[[0.0]])).unwrap();
    assert!((probs[0] - 0.731_058_6).abs() < 1e-5);
}

#[test]
fn split_routes_rows_by_threshold() {
    let model = GbdtModel {
        feature_names: names(&["click"]),
        base_score: 0.0,
        trees: vec![stump(0, 0.5, true, -2.0, 2.0)],
    };
    let probs = model.predict_proba(&arr2(&[[0.2], [0.8]])).unwrap();
    // sigmoid(-2) and sigmoid(2)
    assert!((probs[0] - 0.119_202_9).abs() < 1e-5);
    assert!((probs[1] - 0.880_797).abs() < 1e-5);
}

#[test]
fn nan_follows_default_direction() {
    let to_left = GbdtModel {
        feature_names: names(&["click"]),
        base_score: 0.0,
        trees: vec![stump(0, 0.5, true, -2.0, 2.0)],
    };
    let to_right = GbdtModel {
        feature_names: names(&["click"]),
        base_score: 0.0,
        trees: vec![stump(0, 0.5, false, -2.0, 2.0)],
    };
    let m = arr2(&[[f32::NAN]]);
    assert!(to_left.predict_proba(&m).unwrap()[0] < 0.5);
    assert!(to_right.predict_proba(&m).unwrap()[0] > 0.5);
}

#[test]
fn forest_margins_are_additive() {
    let model = GbdtModel {
        feature_names: names(&["click"]),
        base_score: 0.0,
        trees: vec![stump(0, 0.5, true, -1.0, 1.0), stump(0, 0.5, true, -1.0, 1.0)],
    };
    let probs = model.predict_proba(&arr2(&[[0.9]])).unwrap();
    assert!((probs[0] - 0.880_797).abs() < 1e-5); // sigmoid(2)
}

#[test]
fn matrix_width_must_match_schema() {
    let model = GbdtModel {
        feature_names: names(&["a", "b"]),
        base_score: 0.0,
        trees: Vec::new(),
    };
    let err = model.predict_proba(&arr2(&[[1.0]])).unwrap_err();
    assert!(matches!(
        err,
        ClassifyError::FeatureWidth {
            expected: 2,
            actual: 1
        }
    ));
}

#[test]
fn load_roundtrip_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let model = GbdtModel {
        feature_names: names(&["EventCount", "click", "purchase"]),
        base_score: 0.0,
        trees: vec![stump(1, 0.5, true, -2.0, 2.0)],
    };
    std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();

    let loaded = GbdtModel::load(&path).unwrap();
    assert_eq!(loaded.feature_names, model.feature_names);
    let probs = loaded.predict_proba(&arr2(&[[3.0, 0.9, 0.1]])).unwrap();
    assert!((probs[0] - 0.880_797).abs() < 1e-5);
}

#[test]
fn corrupt_model_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, "not a model").unwrap();
    assert!(matches!(
        GbdtModel::load(&path).unwrap_err(),
        ClassifyError::Json(_)
    ));
}

#[test]
fn structural_validation_rejects_bad_trees() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");

    // Half leaf: left says leaf, right disagrees.
    let mut bad = stump(0, 0.5, true, -1.0, 1.0);
    bad.right_children[1] = 2;
    let model = GbdtModel {
        feature_names: names(&["x"]),
        base_score: 0.0,
        trees: vec![bad],
    };
    std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();
    assert!(matches!(
        GbdtModel::load(&path).unwrap_err(),
        ClassifyError::InvalidModel { .. }
    ));

    // Split feature index beyond the declared schema.
    let model = GbdtModel {
        feature_names: names(&["x"]),
        base_score: 0.0,
        trees: vec![stump(5, 0.5, true, -1.0, 1.0)],
    };
    std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();
    assert!(matches!(
        GbdtModel::load(&path).unwrap_err(),
        ClassifyError::InvalidModel { .. }
    ));

    // Backward child edge would never terminate.
    let mut cyclic = stump(0, 0.5, true, -1.0, 1.0);
    cyclic.left_children[0] = 0;
    let model = GbdtModel {
        feature_names: names(&["x"]),
        base_score: 0.0,
        trees: vec![cyclic],
    };
    std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();
    assert!(matches!(
        GbdtModel::load(&path).unwrap_err(),
        ClassifyError::InvalidModel { .. }
    ));

    // Schema with no features at all.
    let model = GbdtModel {
        feature_names: Vec::new(),
        base_score: 0.0,
        trees: Vec::new(),
    };
    std::fs::write(&path, serde_json::to_string(&model).unwrap()).unwrap();
    assert!(matches!(
        GbdtModel::load(&path).unwrap_err(),
        ClassifyError::InvalidModel { .. }
    ));
}

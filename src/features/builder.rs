//! Feature builder: group → normalize → pivot → join, one pass over the
//! event table plus a second pass for ground-truth labels.

use super::FeatureTable;
use crate::dataset::EventTable;
use ndarray::Array2;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Transform an event table into an aligned (features, ground truth) pair.
///
/// Per user: total event count, then each event type's share of that user's
/// own events. Pairs that never occurred stay NaN — the model's own
/// missing-value handling decides what that means. Ground truth is the first
/// `Fake` value encountered per user in original row order, `None` when the
/// input had no `Fake` column. Both outputs are keyed by the same sorted
/// user order.
pub fn compute_features(table: &EventTable) -> (FeatureTable, Option<Vec<u8>>) {
    let mut pair_counts: BTreeMap<&str, BTreeMap<&str, u32>> = BTreeMap::new();
    let mut all_types: BTreeSet<&str> = BTreeSet::new();
    // First row wins; later labels for the same user are discarded.
    let mut first_labels: BTreeMap<&str, u8> = BTreeMap::new();

    for rec in &table.records {
        *pair_counts
            .entry(rec.user_id.as_str())
            .or_default()
            .entry(rec.event.as_str())
            .or_insert(0) += 1;
        all_types.insert(rec.event.as_str());
        if let Some(label) = rec.fake {
            first_labels.entry(rec.user_id.as_str()).or_insert(label);
        }
    }

    let event_types: Vec<String> = all_types.iter().map(|t| t.to_string()).collect();
    let type_index: HashMap<&str, usize> = all_types
        .iter()
        .enumerate()
        .map(|(i, t)| (*t, i))
        .collect();

    let n_users = pair_counts.len();
    let mut users = Vec::with_capacity(n_users);
    let mut event_counts = Vec::with_capacity(n_users);
    let mut proportions = Array2::from_elem((n_users, event_types.len()), f32::NAN);

    for (row, (user, per_type)) in pair_counts.iter().enumerate() {
        let total: u32 = per_type.values().sum();
        for (event, n) in per_type {
            let col = type_index[event];
            proportions[[row, col]] = *n as f32 / total as f32;
        }
        users.push(user.to_string());
        event_counts.push(total);
    }

    // BTreeMap iterates in key order, so label order matches `users`.
    let ground_truth = table
        .has_labels
        .then(|| first_labels.into_values().collect());

    (
        FeatureTable {
            users,
            event_types,
            event_counts,
            proportions,
        },
        ground_truth,
    )
}

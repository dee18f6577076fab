//! Per-user feature computation from raw event records.

mod builder;

pub use builder::compute_features;

use crate::config::AbsentFeaturePolicy;
use crate::error::{ClassifyError, Result};
use ndarray::Array2;

/// Name of the total-event-count column, first in the native column order.
pub const COUNT_COLUMN: &str = "EventCount";

/// Per-user feature table: one row per distinct user (lexical order), one
/// proportion column per event type seen anywhere in the batch (lexical
/// order). A user who never produced an event type keeps NaN in that cell;
/// the cells are never zero-filled here.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    pub users: Vec<String>,
    pub event_types: Vec<String>,
    /// Raw total events per user, aligned with `users`.
    pub event_counts: Vec<u32>,
    /// users × event_types, each cell the type's share of the user's own
    /// events, NaN where the pair never occurred.
    pub proportions: Array2<f32>,
}

impl FeatureTable {
    pub fn n_users(&self) -> usize {
        self.users.len()
    }

    /// Native column order: `EventCount` first, then event types.
    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(1 + self.event_types.len());
        names.push(COUNT_COLUMN.to_string());
        names.extend(self.event_types.iter().cloned());
        names
    }

    /// Numeric matrix in native column order.
    pub fn to_matrix(&self) -> Array2<f32> {
        let (rows, types) = (self.n_users(), self.event_types.len());
        let mut m = Array2::zeros((rows, 1 + types));
        for row in 0..rows {
            m[[row, 0]] = self.event_counts[row] as f32;
            for col in 0..types {
                m[[row, 1 + col]] = self.proportions[[row, col]];
            }
        }
        m
    }

    /// Reorder columns to the model's declared schema.
    ///
    /// Schema columns absent from this batch are filled per `policy`; batch
    /// event types the schema does not name are rejected outright, since a
    /// column the model never saw cannot be scored.
    pub fn aligned_matrix(
        &self,
        feature_names: &[String],
        policy: AbsentFeaturePolicy,
    ) -> Result<Array2<f32>> {
        let unknown: Vec<String> = self
            .event_types
            .iter()
            .filter(|t| !feature_names.iter().any(|n| n == *t))
            .cloned()
            .collect();
        if !unknown.is_empty() {
            return Err(ClassifyError::UnknownEventTypes { columns: unknown });
        }

        let rows = self.n_users();
        let mut m = Array2::zeros((rows, feature_names.len()));
        for (col, name) in feature_names.iter().enumerate() {
            if name == COUNT_COLUMN {
                for row in 0..rows {
                    m[[row, col]] = self.event_counts[row] as f32;
                }
            } else if let Some(src) = self.event_types.iter().position(|t| t == name) {
                for row in 0..rows {
                    m[[row, col]] = self.proportions[[row, src]];
                }
            } else {
                let fill = match policy {
                    AbsentFeaturePolicy::Missing => f32::NAN,
                    AbsentFeaturePolicy::Zero => 0.0,
                    AbsentFeaturePolicy::Error => {
                        return Err(ClassifyError::AbsentFeature(name.clone()))
                    }
                };
                for row in 0..rows {
                    m[[row, col]] = fill;
                }
            }
        }
        Ok(m)
    }
}

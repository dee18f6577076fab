//! Event-log dataset: record types, delimited-text reader, result writer.
//! One record per observed action; grouping is by user, row order matters
//! only for picking a user's ground-truth label.

mod reader;
mod writer;

use serde::{Deserialize, Serialize};

pub use reader::read_events;
pub use writer::write_scores;

/// One observed action attributed to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub user_id: String,
    pub event: String,
    /// Ground-truth label (0/1) when the input carries a `Fake` column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fake: Option<u8>,
}

/// Parsed event table. `has_labels` reflects the presence of the `Fake`
/// header; when set, every record carries a label (the reader enforces
/// this).
#[derive(Debug, Clone, Default)]
pub struct EventTable {
    pub records: Vec<EventRecord>,
    pub has_labels: bool,
}

impl EventTable {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

/// Final classification output for one user.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredUser {
    pub user_id: String,
    pub is_fake_probability: f32,
}

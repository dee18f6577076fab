//! Pre-trained scoring model, deserialized from a model file.

mod gbdt;

pub use gbdt::{GbdtModel, Tree};

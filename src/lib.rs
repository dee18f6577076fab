//! fakescore — event-log based fake-account classifier.
//!
//! Modular structure:
//! - [`dataset`] — event-log reading, scored-result writing
//! - [`features`] — per-user feature computation
//! - [`model`] — gradient-boosted tree classifier
//! - [`scoring`] — batch scoring driver
//! - [`config`] — run configuration
//! - [`logging`] — structured logging

pub mod config;
pub mod dataset;
pub mod error;
pub mod features;
pub mod logging;
pub mod model;
pub mod scoring;

pub use config::{AbsentFeaturePolicy, AppConfig};
pub use dataset::{EventRecord, EventTable, ScoredUser};
pub use error::{ClassifyError, Result};
pub use features::{compute_features, FeatureTable};
pub use logging::StructuredLogger;
pub use model::GbdtModel;
pub use scoring::{RunPaths, RunReport};

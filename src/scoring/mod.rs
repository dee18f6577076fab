//! Batch scoring: model + event log in, scored users out.

mod driver;

pub use driver::{run, RunPaths, RunReport};

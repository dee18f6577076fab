//! Tracing subscriber: plain lines for operators, one JSON object per line
//! (ndjson) when configured for ingestion.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub struct StructuredLogger;

impl StructuredLogger {
    /// Install the global subscriber: lines to stdout, level from RUST_LOG
    /// or the configured default.
    pub fn init(json: bool, default_level: &str) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let registry = tracing_subscriber::registry().with(filter);
        let to_stdout = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);
        if json {
            registry.with(to_stdout.json()).init();
        } else {
            registry.with(to_stdout.compact()).init();
        }
    }
}

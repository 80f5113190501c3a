pub mod api;
pub mod error;
pub mod parse;
pub mod recorder;
pub mod stats;


pub use api::*;
pub use error::Error;
pub use recorder::{FileRecorder, Recorder, StdoutRecorder};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Respects `RUST_LOG`, defaulting
/// to `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

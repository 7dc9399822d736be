//! Browser Logging
//!
//! Routes `tracing` events from both crates to the browser console.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_web::MakeWebConsoleWriter;

use crate::config::{DEFAULT_LOG_FILTER, WebConfig};

/// Install the global subscriber. Call once, before mounting.
pub fn init(config: &WebConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // No timer: `SystemTime` is unavailable in the browser
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .init();
}

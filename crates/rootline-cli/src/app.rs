//! Publisher loop and process lifecycle.
//!
//! Setup order matters: the display connection comes first so that the
//! session guard covers every later failure (signal registration, source
//! open, mid-loop read errors all unwind through it); the guard never
//! exists if the connection itself was refused.

use std::io;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use rootline_core::sources::MetricSources;
use rootline_core::{interrupt, status};
use tracing::{debug, info};

use crate::display::DisplaySession;

/// Fixed delay between publishes. Post-work sleep, no drift correction.
const PUBLISH_INTERVAL: Duration = Duration::from_secs(1);

/// Connects, opens the metric sources, then publishes until a shutdown
/// signal arrives. Returns `Ok` only on signal-triggered shutdown.
///
/// # Errors
/// Returns an error on any setup failure or mid-loop read/publish failure.
pub fn run() -> Result<()> {
    init_tracing();

    let session = DisplaySession::connect()?;
    interrupt::init()?;
    let sources = MetricSources::open()?;

    info!(
        interval_secs = PUBLISH_INTERVAL.as_secs(),
        "publishing to the root window"
    );

    while !interrupt::should_terminate() {
        let now = Utc::now();
        let sample = sources.sample()?;
        let line = status::render(now, &sample);

        session.publish(line.as_str())?;
        debug!(line = line.as_str(), "published");

        thread::sleep(PUBLISH_INTERVAL);
    }

    info!("shutdown signal received");
    Ok(())
}

fn init_tracing() {
    // Fixed level: the external interface consumes no environment variables,
    // so there is deliberately no env-filter here.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

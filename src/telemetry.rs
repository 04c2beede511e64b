//! Telemetry logic.
//! Support logging and metrics.

use metrics::Unit;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const OUTCOMES_METRIC: &str = "profile_page_outcomes_total";

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`.
pub fn setup_logging(
    default_filter: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}

/// Describe the metrics emitted by the presenter.
///
/// No recorder is installed here, the host application picks one.
pub fn describe_metrics() {
    metrics::describe_counter!(
        OUTCOMES_METRIC,
        Unit::Count,
        "Outcomes of profile page operations."
    );
}

/// Count one outcome of `operation` (`identity`, `profile` or `sign_out`).
pub fn record_outcome(operation: &'static str, outcome: &'static str) {
    let labels = [("operation", operation), ("outcome", outcome)];
    metrics::counter!(OUTCOMES_METRIC, &labels).increment(1);
}

//! Application telemetry sink.
//!
//! Separate from the operational `tracing` pipeline: telemetry records are
//! free-text breadcrumbs tagging which entry point a callback came through,
//! the kind of thing an application-monitoring backend ingests. The sink is
//! injected through [`AppState`](crate::router::AppState) so tests can
//! capture records without side effects.

/// Best-effort sink for application telemetry records.
///
/// A sink must never let a failure reach the caller; the response path does
/// not depend on telemetry.
pub trait TelemetrySink: Send + Sync {
    fn record(&self, message: &str);
}

/// Default sink that forwards records to `tracing` under a dedicated target.
#[derive(Debug, Default)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn record(&self, message: &str) {
        tracing::info!(target: "callrelay::telemetry", "{}", message);
    }
}

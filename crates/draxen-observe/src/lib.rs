//! Observability setup for Draxen: structured logging with optional
//! OpenTelemetry span export.

pub mod tracing_setup;

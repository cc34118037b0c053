//! Adapters - Connections from the domain to the process environment.
//!
//! - `telemetry` - `tracing-subscriber` installation driven by `LoggingConfig`

pub mod telemetry;

pub use telemetry::{init_tracing, TelemetryError};

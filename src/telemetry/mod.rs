//! Structured logging for quickrepo.
//!
//! Log events go to stderr so they never mix with prompts or the result line.
//!
//! # Feature Flags
//!
//! - `release-logs`: Strip debug/trace at compile time
//! - `max-perf`: Disable all tracing

mod init;

pub use init::{init_telemetry, TelemetryConfig};

//! Event Sink Implementations
//!
//! Concrete implementations of `PackageEventSink`:
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The human-readable console sink lives with the binary's UI code.

mod json;

pub use json::{event_to_json, JsonEventSink};

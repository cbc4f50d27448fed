//! Common test utilities for mapdlc CLI tests.
//!
//! - `TestEnv`: isolated working directory with a fake archive tool
//! - Fixtures: reusable asset content and tool scripts

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;

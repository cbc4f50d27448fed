//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use mapdlc::presentation::factory;
//!
//! let use_case = factory::create_package_use_case(&config)?;
//! let report = use_case.execute(&options, &sink);
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen, Commands, RunArgs};
pub use factory::{create_archive_builder, create_package_use_case};

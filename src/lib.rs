//! mapdlc - map DLC package assembler
//!
//! mapdlc turns a directory of loose mapping folders into installable DLC
//! packages: each project's assets are flattened into an inner archive,
//! nested inside an outer package archive next to generated `content.xml`
//! and `setup2.xml` manifests.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PackageOptions, PackageUseCase, ProjectOutcome, RunReport};
pub use config::Config;
pub use domain::ports::{PackageEvent, PackageEventSink};
pub use error::{MapDlcError, MapDlcResult};

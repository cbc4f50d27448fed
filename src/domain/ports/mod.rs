//! Domain Ports (Interfaces)
//!
//! Boundaries between the pipeline and the outside world. The
//! infrastructure layer provides the concrete implementations.

pub mod archive_builder;
pub mod clock;
pub mod package_events;

pub use archive_builder::{ArchiveBuilder, ArchiveOutcome};
pub use clock::{Clock, FixedClock};
pub use package_events::{NoopEventSink, PackageEvent, PackageEventSink};

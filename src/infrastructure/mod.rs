//! Infrastructure Layer
//!
//! Concrete implementations of domain ports; all I/O lives here.
//!
//! ## Structure
//!
//! - `archive/` - External archive tool adapter
//! - `fs/` - Project discovery, asset scanning, staging directories
//! - `events/` - Event sinks (NDJSON)

pub mod archive;
pub mod clock;
pub mod events;
pub mod fs;

pub use archive::CommandArchiveBuilder;
pub use clock::SystemClock;
pub use events::JsonEventSink;
pub use fs::{AssetScanner, CopyOutcome, ProjectDiscovery, ProjectListing, StagingAreaManager};

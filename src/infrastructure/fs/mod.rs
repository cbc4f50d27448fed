//! Local file system adapters: discovery, scanning, staging

mod discovery;
mod scanner;
mod staging;

pub use discovery::{ProjectDiscovery, ProjectListing};
pub use scanner::AssetScanner;
pub use staging::{CopyOutcome, StagingAreaManager};

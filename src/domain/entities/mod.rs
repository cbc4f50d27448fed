//! Domain Entities
//!
//! - `MappingProject` - an input folder under the input root
//! - `AssetFile` / `AssetScan` - discovered map files
//! - `PackageLayout` / `PackageArtifact` - where a project's output goes

mod asset;
mod package;
mod project;

pub use asset::{AssetFile, AssetScan, ScanSkipReason, SkippedSubtree};
pub use package::{
    ArchiveNaming, PackageArtifact, PackageLayout, CONTENT_MANIFEST, SETUP_MANIFEST,
    STAGING_PREFIX,
};
pub use project::MappingProject;

//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::PackageUseCase;
use crate::config::Config;
use crate::error::MapDlcResult;
use crate::infrastructure::{AssetScanner, CommandArchiveBuilder, SystemClock};

/// Type alias for the concrete PackageUseCase with all dependencies
pub type ConcretePackageUseCase = PackageUseCase<CommandArchiveBuilder, SystemClock>;

/// The configured external archive tool
pub fn create_archive_builder(config: &Config) -> CommandArchiveBuilder {
    CommandArchiveBuilder::new(
        config.archive.tool.clone(),
        config.archive.verb.clone(),
        config.archive.naming().extension,
    )
}

/// Create a package use case with all dependencies wired up
///
/// Fails only when a custom manifest template cannot be read or compiled.
pub fn create_package_use_case(config: &Config) -> MapDlcResult<ConcretePackageUseCase> {
    let manifests = config.manifest_engine()?;
    let scanner = AssetScanner::new(config.scan.whitelist());

    Ok(PackageUseCase::new(
        create_archive_builder(config),
        SystemClock,
        scanner,
        manifests,
    ))
}

//! Configuration module for mapdlc
//!
//! One immutable `Config` is resolved at startup (file, then env, then CLI
//! flags) and handed to the packaging use case by reference.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::PROJECT_CONFIG_FILE;
pub use types::{
    ArchiveConfig, ColorMode, Config, LoadedConfig, ManifestConfig, OutputConfig, PathsConfig,
    ScanConfig,
};

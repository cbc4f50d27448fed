//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod extension;
mod names;
mod pipeline_state;

pub use config_warning::ConfigWarning;
pub use extension::{ExtensionWhitelist, DEFAULT_ASSET_EXTENSIONS};
pub use names::{derive_names, NameSet, DEFAULT_LEVEL_HASH, PACKAGE_PREFIX};
pub use pipeline_state::PipelineState;

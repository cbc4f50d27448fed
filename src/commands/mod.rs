//! Command handlers for the mapdlc binary

pub mod build;
pub mod check;
pub mod plan;

use std::path::Path;

use anyhow::Result;
use mapdlc::config::{Config, LoadedConfig};
use mapdlc::presentation::RunArgs;

/// Effective configuration for one command: config file and env layers,
/// then the command line flags on top.
pub(crate) fn load_config(config_path: Option<&Path>, run: &RunArgs) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;
    let mut loaded = Config::resolve(config_path, &cwd)?;
    loaded.config = run.apply(loaded.config);
    Ok(loaded)
}

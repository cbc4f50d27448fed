//! Configuration type definitions

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::ArchiveNaming;
use crate::domain::services::ManifestTemplateEngine;
use crate::domain::value_objects::{
    ConfigWarning, ExtensionWhitelist, DEFAULT_ASSET_EXTENSIONS, DEFAULT_LEVEL_HASH,
};
use crate::error::{MapDlcError, MapDlcResult};

use super::loader;

/// Input and output roots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding one subdirectory per mapping project
    #[serde(default = "default_input")]
    pub input: PathBuf,

    /// Directory receiving one `dlc_*` directory per packaged project
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from("mappings")
}

fn default_output() -> PathBuf {
    PathBuf::from("output")
}

/// External archive tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Tool executable (bare names are looked up on PATH)
    #[serde(default = "default_tool")]
    pub tool: PathBuf,

    /// Sub-command that creates an archive
    #[serde(default = "default_verb")]
    pub verb: String,

    /// Extension of produced archives
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Folder the inner archive is placed under inside the package
    #[serde(default = "default_platform_folder")]
    pub platform_folder: String,

    /// Base name of the outer package archive
    #[serde(default = "default_outer_name")]
    pub outer_name: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            verb: default_verb(),
            extension: default_extension(),
            platform_folder: default_platform_folder(),
            outer_name: default_outer_name(),
        }
    }
}

impl ArchiveConfig {
    pub fn naming(&self) -> ArchiveNaming {
        ArchiveNaming {
            extension: self.extension.trim_start_matches('.').to_string(),
            platform_folder: self.platform_folder.clone(),
            outer_name: self.outer_name.clone(),
        }
    }
}

fn default_tool() -> PathBuf {
    PathBuf::from("gtautil")
}

fn default_verb() -> String {
    "createarchive".to_string()
}

fn default_extension() -> String {
    "rpf".to_string()
}

fn default_platform_folder() -> String {
    "x64".to_string()
}

fn default_outer_name() -> String {
    "dlc".to_string()
}

/// Asset discovery configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl ScanConfig {
    pub fn whitelist(&self) -> ExtensionWhitelist {
        ExtensionWhitelist::new(&self.extensions)
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_ASSET_EXTENSIONS
        .iter()
        .map(|e| e.to_string())
        .collect()
}

/// Manifest generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Level name hash written into the content manifest.
    ///
    /// Shared by every project in a run; it is not derived from the name.
    #[serde(default = "default_level_hash")]
    pub level_hash: String,

    /// Replacement for the built-in content.xml template
    #[serde(default)]
    pub content_template: Option<PathBuf>,

    /// Replacement for the built-in setup2.xml template
    #[serde(default)]
    pub setup_template: Option<PathBuf>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            level_hash: default_level_hash(),
            content_template: None,
            setup_template: None,
        }
    }
}

fn default_level_hash() -> String {
    DEFAULT_LEVEL_HASH.to_string()
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure.
///
/// Built once at startup and never mutated during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub archive: ArchiveConfig,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MapDlcResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MapDlcResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration for a run.
    ///
    /// See [`loader::resolve`] for the lookup order.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> MapDlcResult<LoadedConfig> {
        loader::resolve(explicit, cwd)
    }

    /// Apply environment variable overrides (MAPDLC_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Compile the manifest templates, reading custom template files if configured
    pub fn manifest_engine(&self) -> MapDlcResult<ManifestTemplateEngine> {
        let extension = self.archive.naming().extension;
        if self.manifest.content_template.is_none() && self.manifest.setup_template.is_none() {
            return ManifestTemplateEngine::builtin(&extension);
        }

        let content = read_template(
            self.manifest.content_template.as_deref(),
            crate::domain::services::manifest::BUILTIN_CONTENT_TEMPLATE,
        )?;
        let setup = read_template(
            self.manifest.setup_template.as_deref(),
            crate::domain::services::manifest::BUILTIN_SETUP_TEMPLATE,
        )?;
        ManifestTemplateEngine::from_sources(&content, &setup, &extension)
    }
}

fn read_template(path: Option<&Path>, builtin: &str) -> MapDlcResult<String> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| MapDlcError::InvalidConfig {
            file: path.to_path_buf(),
            message: format!("cannot read template: {}", e),
        }),
        None => Ok(builtin.to_string()),
    }
}

/// Effective configuration plus where it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` means built-in defaults
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

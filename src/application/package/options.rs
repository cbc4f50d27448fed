//! Package options

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::entities::{ArchiveNaming, MappingProject};
use crate::domain::value_objects::DEFAULT_LEVEL_HASH;

/// Options for a packaging run
#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Directory holding one subdirectory per project
    pub input_root: PathBuf,
    /// Directory receiving the `dlc_*` package directories
    pub output_root: PathBuf,
    /// Archive extension, platform folder and outer archive name
    pub naming: ArchiveNaming,
    /// Level name hash written into every content manifest
    pub level_hash: String,
    /// Only process these folder names (empty = all)
    pub projects: Vec<String>,
    /// Leave `temp_*` directories in place after a run
    pub keep_staging: bool,
}

impl PackageOptions {
    pub fn new(input_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            output_root: output_root.into(),
            naming: ArchiveNaming::default(),
            level_hash: DEFAULT_LEVEL_HASH.to_string(),
            projects: Vec::new(),
            keep_staging: false,
        }
    }

    /// Options taken from the effective configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.paths.input, &config.paths.output)
            .with_naming(config.archive.naming())
            .with_level_hash(config.manifest.level_hash.clone())
    }

    pub fn with_naming(mut self, naming: ArchiveNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn with_level_hash(mut self, level_hash: impl Into<String>) -> Self {
        self.level_hash = level_hash.into();
        self
    }

    /// Restrict the run to the given folder names
    pub fn with_projects<I, S>(mut self, projects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.projects = projects.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_keep_staging(mut self, keep_staging: bool) -> Self {
        self.keep_staging = keep_staging;
        self
    }

    /// Apply the project filter.
    ///
    /// Returns the selected projects (discovery order kept) and the filter
    /// names that matched no folder.
    pub fn select(&self, projects: Vec<MappingProject>) -> (Vec<MappingProject>, Vec<String>) {
        if self.projects.is_empty() {
            return (projects, Vec::new());
        }

        let unmatched = self
            .projects
            .iter()
            .filter(|name| !projects.iter().any(|p| p.folder_name() == name.as_str()))
            .cloned()
            .collect();
        let selected = projects
            .into_iter()
            .filter(|p| self.projects.iter().any(|name| name == p.folder_name()))
            .collect();

        (selected, unmatched)
    }
}

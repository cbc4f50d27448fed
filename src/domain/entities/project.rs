//! Mapping project entity - one input folder under the input root

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{derive_names, NameSet};

/// A single map/asset bundle discovered under the input root.
///
/// Read-only for the whole pipeline; the folder itself is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingProject {
    path: PathBuf,
    folder_name: String,
}

impl MappingProject {
    /// Create a project from its directory path.
    ///
    /// The folder name is the last path component, lossily decoded.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let folder_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, folder_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw folder name as it appears on disk
    pub fn folder_name(&self) -> &str {
        &self.folder_name
    }

    /// Derive the identifier set for this project
    pub fn names(&self) -> NameSet {
        derive_names(&self.folder_name)
    }
}

//! Project Discovery
//!
//! Lists the project folders directly under the input root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::{MappingProject, ScanSkipReason, SkippedSubtree};
use crate::error::{MapDlcError, MapDlcResult};

/// Projects found under the input root, plus entries that could not be inspected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectListing {
    pub projects: Vec<MappingProject>,
    pub skipped: Vec<SkippedSubtree>,
}

/// One-level, non-recursive listing of project directories
#[derive(Debug, Clone)]
pub struct ProjectDiscovery {
    root: PathBuf,
    exclude: Vec<PathBuf>,
}

impl ProjectDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            exclude: Vec::new(),
        }
    }

    /// Never report `path` as a project (e.g. an output root nested in the input root)
    pub fn excluding(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.exclude
            .push(fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()));
        self
    }

    /// Project directories sorted by folder name.
    ///
    /// Non-directory entries and dangling links are ignored. Entries that
    /// cannot be inspected land in `skipped`. Failure to list the root is fatal.
    pub fn list_projects(&self) -> MapDlcResult<ProjectListing> {
        let entries = fs::read_dir(&self.root).map_err(|e| MapDlcError::InputRootUnreadable {
            path: self.root.clone(),
            message: e.to_string(),
        })?;

        let mut listing = ProjectListing::default();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    listing.skipped.push(self.skipped(self.root.clone(), &e));
                    continue;
                }
            };

            match fs::metadata(&path) {
                Ok(meta) if meta.is_dir() => {}
                Ok(_) => continue,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => {
                    listing.skipped.push(self.skipped(path, &e));
                    continue;
                }
            }

            if !self.is_excluded(&path) {
                listing.projects.push(MappingProject::new(path));
            }
        }

        listing
            .projects
            .sort_by(|a, b| a.folder_name().cmp(b.folder_name()));
        Ok(listing)
    }

    fn skipped(&self, path: PathBuf, err: &io::Error) -> SkippedSubtree {
        SkippedSubtree {
            path,
            reason: ScanSkipReason::from_io(err),
        }
    }

    fn is_excluded(&self, path: &Path) -> bool {
        if self.exclude.is_empty() {
            return false;
        }
        let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        self.exclude.iter().any(|e| *e == resolved)
    }
}

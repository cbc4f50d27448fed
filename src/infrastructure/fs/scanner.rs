//! Asset Scanner
//!
//! Depth-first walk of a project folder collecting whitelisted files.
//! Unreadable directories are recorded in the returned `AssetScan` and the
//! walk continues with their siblings; a scan never fails.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::{AssetFile, AssetScan, ScanSkipReason};
use crate::domain::value_objects::ExtensionWhitelist;

/// Recursive asset discovery over the local file system
#[derive(Debug, Clone, Default)]
pub struct AssetScanner {
    whitelist: ExtensionWhitelist,
}

impl AssetScanner {
    pub fn new(whitelist: ExtensionWhitelist) -> Self {
        Self { whitelist }
    }

    pub fn whitelist(&self) -> &ExtensionWhitelist {
        &self.whitelist
    }

    /// Scan `root` and everything below it.
    ///
    /// Assets are keyed by canonical path, so a file reachable through two
    /// routes (e.g. a symlinked directory) counts once. Directory symlink
    /// cycles are walked only once.
    pub fn scan(&self, root: &Path) -> AssetScan {
        let mut scan = AssetScan::new();
        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let key = fs::canonicalize(&dir).unwrap_or_else(|_| dir.clone());
            if !visited.insert(key) {
                continue;
            }

            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    scan.add_skipped(dir, ScanSkipReason::from_io(&e));
                    continue;
                }
            };

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        scan.add_skipped(dir.clone(), ScanSkipReason::from_io(&e));
                        continue;
                    }
                };

                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.is_file() && self.whitelist.matches(&path) {
                    let resolved = fs::canonicalize(&path).unwrap_or(path);
                    scan.add_asset(AssetFile::new(resolved));
                }
            }
        }

        scan
    }
}

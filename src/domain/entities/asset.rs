//! Asset entities - discovered map files and the scan that found them

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A discovered asset file.
///
/// Identity is the resolved path, so the same file reached twice is one asset.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetFile {
    path: PathBuf,
    extension: String,
}

impl AssetFile {
    /// Create an asset from a resolved path. The extension is stored lowercase.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        Self { path, extension }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// File name used when the asset is flattened into a staging directory
    pub fn file_name(&self) -> Option<&std::ffi::OsStr> {
        self.path.file_name()
    }
}

/// Why a subtree was left out of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanSkipReason {
    /// Directory vanished before it could be read
    NotFound,
    /// Directory exists but cannot be listed
    PermissionDenied,
    /// Any other OS-level failure
    Unexpected(String),
}

impl ScanSkipReason {
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => ScanSkipReason::NotFound,
            std::io::ErrorKind::PermissionDenied => ScanSkipReason::PermissionDenied,
            _ => ScanSkipReason::Unexpected(err.to_string()),
        }
    }

    pub fn is_unexpected(&self) -> bool {
        matches!(self, ScanSkipReason::Unexpected(_))
    }
}

impl std::fmt::Display for ScanSkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanSkipReason::NotFound => write!(f, "directory not found"),
            ScanSkipReason::PermissionDenied => write!(f, "permission denied"),
            ScanSkipReason::Unexpected(msg) => write!(f, "unexpected error: {}", msg),
        }
    }
}

/// A subtree the scanner could not read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSubtree {
    pub path: PathBuf,
    pub reason: ScanSkipReason,
}

/// Result of one asset scan: the files found plus every subtree skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetScan {
    pub assets: BTreeSet<AssetFile>,
    pub skipped: Vec<SkippedSubtree>,
}

impl AssetScan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset; returns false if it was already present
    pub fn add_asset(&mut self, asset: AssetFile) -> bool {
        self.assets.insert(asset)
    }

    pub fn add_skipped(&mut self, path: PathBuf, reason: ScanSkipReason) {
        self.skipped.push(SkippedSubtree { path, reason });
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

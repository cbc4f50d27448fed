//! Staging Area Manager
//!
//! Creates and tears down the scratch directories fed to the archive tool.
//! Creation is idempotent and removal is best-effort: callers decide whether
//! a failure matters, nothing here panics or retries.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{MapDlcError, MapDlcResult};

/// Outcome of copying one file into a staging directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// File was copied to the contained path
    Copied(PathBuf),
    /// A file with the same name was already staged; nothing was written
    AlreadyExists(PathBuf),
}

/// Local-disk staging operations
#[derive(Debug, Clone, Copy, Default)]
pub struct StagingAreaManager;

impl StagingAreaManager {
    pub fn new() -> Self {
        Self
    }

    /// Create `path` and any missing ancestors. Succeeds if it already exists.
    pub fn ensure(&self, path: &Path) -> MapDlcResult<()> {
        fs::create_dir_all(path).map_err(|e| MapDlcError::staging("create directory", path, e))
    }

    /// Copy `file` into `dest_dir` under its own file name.
    ///
    /// An existing destination file is left untouched.
    pub fn copy_into(&self, file: &Path, dest_dir: &Path) -> MapDlcResult<CopyOutcome> {
        let name = file.file_name().ok_or_else(|| {
            MapDlcError::staging(
                "copy",
                file,
                io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
            )
        })?;
        let dest = dest_dir.join(name);

        let mut target = match OpenOptions::new().write(true).create_new(true).open(&dest) {
            Ok(target) => target,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Ok(CopyOutcome::AlreadyExists(dest));
            }
            Err(e) => return Err(MapDlcError::staging("copy", &dest, e)),
        };

        let copied = fs::File::open(file).and_then(|mut source| io::copy(&mut source, &mut target));
        if let Err(e) = copied {
            drop(target);
            let _ = fs::remove_file(&dest);
            return Err(MapDlcError::staging("copy", file, e));
        }

        Ok(CopyOutcome::Copied(dest))
    }

    /// Recursively delete `path`.
    ///
    /// Returns `Ok(false)` when there was nothing to delete.
    pub fn remove(&self, path: &Path) -> MapDlcResult<bool> {
        match fs::remove_dir_all(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(MapDlcError::staging("remove", path, e)),
        }
    }

    /// Delete a single file. `Ok(false)` when it did not exist.
    pub fn remove_file(&self, path: &Path) -> MapDlcResult<bool> {
        match fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(MapDlcError::staging("remove", path, e)),
        }
    }

    /// Write `contents` to `path`, replacing any existing file.
    pub fn write_file(&self, path: &Path, contents: &str) -> MapDlcResult<()> {
        fs::write(path, contents).map_err(|e| MapDlcError::staging("write", path, e))
    }

    /// Move a single file, creating the destination's parent if needed.
    pub fn relocate(&self, src: &Path, dest: &Path) -> MapDlcResult<()> {
        if let Some(parent) = dest.parent() {
            self.ensure(parent)?;
        }

        if fs::rename(src, dest).is_ok() {
            return Ok(());
        }

        // rename cannot cross file systems; fall back to copy + delete
        fs::copy(src, dest).map_err(|e| MapDlcError::staging("move", src, e))?;
        fs::remove_file(src).map_err(|e| MapDlcError::staging("move", src, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_is_idempotent() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        let staging = StagingAreaManager::new();

        staging.ensure(&nested).unwrap();
        staging.ensure(&nested).unwrap();

        assert!(nested.is_dir());
    }

    #[test]
    fn ensure_fails_when_a_file_is_in_the_way() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "x").unwrap();

        let err = StagingAreaManager::new()
            .ensure(&blocker.join("child"))
            .unwrap_err();
        assert!(matches!(err, MapDlcError::Staging { .. }));
    }

    #[test]
    fn copy_into_never_overwrites() {
        let dir = tempdir().unwrap();
        let src_a = dir.path().join("one/a.ymap");
        let src_b = dir.path().join("two/a.ymap");
        let dest = dir.path().join("dest");
        fs::create_dir_all(src_a.parent().unwrap()).unwrap();
        fs::create_dir_all(src_b.parent().unwrap()).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(&src_a, "first").unwrap();
        fs::write(&src_b, "second").unwrap();

        let staging = StagingAreaManager::new();
        let first = staging.copy_into(&src_a, &dest).unwrap();
        let second = staging.copy_into(&src_b, &dest).unwrap();

        assert_eq!(first, CopyOutcome::Copied(dest.join("a.ymap")));
        assert_eq!(second, CopyOutcome::AlreadyExists(dest.join("a.ymap")));
        assert_eq!(fs::read_to_string(dest.join("a.ymap")).unwrap(), "first");
    }

    #[test]
    fn copy_into_reports_missing_source_without_leaving_a_stub() {
        let dir = tempdir().unwrap();
        let staging = StagingAreaManager::new();

        let result = staging.copy_into(&dir.path().join("nope.ymap"), dir.path());

        assert!(result.is_err());
        assert!(!dir.path().join("nope.ymap").exists());
    }

    #[test]
    fn remove_tolerates_missing_directory() {
        let dir = tempdir().unwrap();
        let staging = StagingAreaManager::new();
        let tree = dir.path().join("tree");
        fs::create_dir_all(tree.join("x/y")).unwrap();
        fs::write(tree.join("x/y/z"), "z").unwrap();

        assert!(staging.remove(&tree).unwrap());
        assert!(!tree.exists());
        assert!(!staging.remove(&tree).unwrap());
    }

    #[test]
    fn relocate_moves_file_into_new_directory() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("inner.rpf");
        let dest = dir.path().join("temp_package/x64/inner.rpf");
        fs::write(&src, "archive").unwrap();

        StagingAreaManager::new().relocate(&src, &dest).unwrap();

        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "archive");
    }
}

//! Package entities - on-disk layout of one project's output
//!
//! ```text
//! <output>/<packageNameLower>/
//!   dlc.<ext>                      final outer archive
//!   temp_assets/                   flat copy of assets (inner archive input)
//!   temp_package/                  outer archive input
//!     <platform>/<slugLower>.<ext>
//!     content.xml
//!     setup2.xml
//! ```
//!
//! The two `temp_*` directories only exist while the project is being built.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::NameSet;

/// Prefix shared by all staging directories
pub const STAGING_PREFIX: &str = "temp_";

/// File name of the content manifest inside the outer archive
pub const CONTENT_MANIFEST: &str = "content.xml";

/// File name of the setup manifest inside the outer archive
pub const SETUP_MANIFEST: &str = "setup2.xml";

/// Archive naming shared by all projects in a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveNaming {
    /// Archive file extension, without the dot
    pub extension: String,
    /// Platform subfolder the inner archive lives under
    pub platform_folder: String,
    /// Base name of the outer archive
    pub outer_name: String,
}

impl Default for ArchiveNaming {
    fn default() -> Self {
        Self {
            extension: "rpf".to_string(),
            platform_folder: "x64".to_string(),
            outer_name: "dlc".to_string(),
        }
    }
}

/// Every path one project's pipeline touches, computed up front
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    package_dir: PathBuf,
    inner_name: String,
    naming: ArchiveNaming,
}

impl PackageLayout {
    pub fn new(output_root: &Path, names: &NameSet, naming: &ArchiveNaming) -> Self {
        Self {
            package_dir: output_root.join(names.package_name_lower()),
            inner_name: names.slug_lower().to_string(),
            naming: naming.clone(),
        }
    }

    /// `<output>/<packageNameLower>`
    pub fn package_dir(&self) -> &Path {
        &self.package_dir
    }

    /// Staging directory holding the flattened assets
    pub fn assets_staging(&self) -> PathBuf {
        self.package_dir.join(format!("{}assets", STAGING_PREFIX))
    }

    /// Staging directory holding the outer archive layout
    pub fn package_staging(&self) -> PathBuf {
        self.package_dir.join(format!("{}package", STAGING_PREFIX))
    }

    pub fn platform_dir(&self) -> PathBuf {
        self.package_staging().join(&self.naming.platform_folder)
    }

    /// Base name passed to the archive tool for the inner archive
    pub fn inner_name(&self) -> &str {
        &self.inner_name
    }

    /// Base name passed to the archive tool for the outer archive
    pub fn outer_name(&self) -> &str {
        &self.naming.outer_name
    }

    pub fn extension(&self) -> &str {
        &self.naming.extension
    }

    /// Where the archive tool writes the inner archive
    pub fn inner_archive_built(&self) -> PathBuf {
        self.package_dir.join(self.archive_file(&self.inner_name))
    }

    /// Where the inner archive is relocated to before the outer build
    pub fn inner_archive_staged(&self) -> PathBuf {
        self.platform_dir().join(self.archive_file(&self.inner_name))
    }

    pub fn outer_archive(&self) -> PathBuf {
        self.package_dir.join(self.archive_file(&self.naming.outer_name))
    }

    pub fn content_manifest(&self) -> PathBuf {
        self.package_staging().join(CONTENT_MANIFEST)
    }

    pub fn setup_manifest(&self) -> PathBuf {
        self.package_staging().join(SETUP_MANIFEST)
    }

    /// Both staging directories, inner first
    pub fn staging_dirs(&self) -> [PathBuf; 2] {
        [self.assets_staging(), self.package_staging()]
    }

    fn archive_file(&self, base: &str) -> String {
        format!("{}.{}", base, self.naming.extension)
    }
}

/// A finished package on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageArtifact {
    /// `<output>/<packageNameLower>`
    pub directory: PathBuf,
    /// The outer archive inside `directory`
    pub archive: PathBuf,
}

//! ArchiveBuilder port - the external archiving tool
//!
//! The archive format is opaque to mapdlc. A builder takes a directory and
//! produces exactly one archive file from it; that is the whole contract.

use std::path::Path;

/// Outcome of one archive build.
///
/// A failed build is not an error: the pipeline logs `diagnostic` and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOutcome {
    pub succeeded: bool,
    /// Captured tool output, or a description of why the build failed
    pub diagnostic: String,
}

impl ArchiveOutcome {
    pub fn success(diagnostic: impl Into<String>) -> Self {
        Self {
            succeeded: true,
            diagnostic: diagnostic.into(),
        }
    }

    pub fn failure(diagnostic: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            diagnostic: diagnostic.into(),
        }
    }
}

/// Builds an archive from a staging directory
///
/// Implementations:
/// - `CommandArchiveBuilder` - runs the configured external tool
pub trait ArchiveBuilder {
    /// Name of this builder (for diagnostics)
    fn name(&self) -> &str;

    /// Extension of produced archives, without the dot
    fn extension(&self) -> &str;

    /// Whether the builder can run on this system
    fn is_available(&self) -> bool;

    /// Build `<output_dir>/<archive_name>.<extension>` from `input_dir`.
    ///
    /// Blocks until the build finishes. On success the archive file exists.
    fn build(&self, input_dir: &Path, output_dir: &Path, archive_name: &str) -> ArchiveOutcome;
}

impl<T: ArchiveBuilder + ?Sized> ArchiveBuilder for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn extension(&self) -> &str {
        (**self).extension()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn build(&self, input_dir: &Path, output_dir: &Path, archive_name: &str) -> ArchiveOutcome {
        (**self).build(input_dir, output_dir, archive_name)
    }
}

impl<T: ArchiveBuilder + ?Sized> ArchiveBuilder for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn extension(&self) -> &str {
        (**self).extension()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn build(&self, input_dir: &Path, output_dir: &Path, archive_name: &str) -> ArchiveOutcome {
        (**self).build(input_dir, output_dir, archive_name)
    }
}

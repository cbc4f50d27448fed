//! Package Event Port
//!
//! Everything the pipeline wants to tell the user goes through here, so the
//! core never prints. Sinks decide whether output is a console log, an NDJSON
//! stream, or nothing.

use std::path::PathBuf;

use crate::domain::value_objects::PipelineState;

/// Event emitted during a packaging run
#[derive(Debug, Clone, PartialEq)]
pub enum PackageEvent {
    /// Run started after project discovery
    RunStarted {
        input: PathBuf,
        output: PathBuf,
        project_count: usize,
    },

    /// Input root could not be listed; nothing will be processed
    RunFatal { path: PathBuf, error: String },

    /// An entry under the input root could not be inspected; it is not processed
    EntrySkipped { path: PathBuf, reason: String },

    /// A project entered the pipeline
    ProjectStarted {
        index: usize,
        project: String,
        package: String,
    },

    /// A project advanced to a new state
    StepEntered {
        project: String,
        state: PipelineState,
    },

    /// Asset discovery skipped an unreadable subtree
    ScanSkipped {
        project: String,
        path: PathBuf,
        reason: String,
        unexpected: bool,
    },

    /// Asset discovery finished
    AssetsFound { project: String, count: usize },

    /// Two assets share a file name; only the first is staged
    AssetNameCollision { project: String, path: PathBuf },

    /// An asset could not be copied into staging; the package will lack it
    AssetCopyFailed {
        project: String,
        path: PathBuf,
        error: String,
    },

    /// The archive tool reported failure
    ArchiveBuildFailed {
        project: String,
        archive: String,
        diagnostic: String,
    },

    /// Best-effort removal of a directory failed
    CleanupFailed { path: PathBuf, error: String },

    /// Project produced no output (no assets, or folder unreadable)
    ProjectSkipped { project: String, reason: String },

    /// A step failed; staging was cleaned up
    ProjectFailed {
        project: String,
        step: PipelineState,
        error: String,
    },

    /// Project finished with an output directory
    ProjectPackaged {
        project: String,
        artifact: PathBuf,
        partial: bool,
    },

    /// Run completed
    RunCompleted {
        packaged: usize,
        partial: usize,
        skipped: usize,
        failed: usize,
    },
}

/// Trait for receiving package events
///
/// Implementations:
/// - `ConsoleEventSink` (binary): human-readable terminal output
/// - `JsonEventSink`: NDJSON stream for CI
/// - `NoopEventSink`: silent operation
pub trait PackageEventSink {
    /// Handle a package event
    fn on_event(&self, event: PackageEvent);

    /// Whether this sink wants per-step and per-file events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

impl<T: PackageEventSink + ?Sized> PackageEventSink for &T {
    fn on_event(&self, event: PackageEvent) {
        (**self).on_event(event)
    }

    fn wants_detailed_events(&self) -> bool {
        (**self).wants_detailed_events()
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PackageEventSink for NoopEventSink {
    fn on_event(&self, _event: PackageEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}

//! Per-project pipeline state
//!
//! `PackageRun` is the only place a project's `PipelineState` changes. It
//! remembers every scratch path created for the project so the single
//! `fail` transition can tear them down.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::domain::entities::PackageArtifact;
use crate::domain::ports::{PackageEvent, PackageEventSink};
use crate::domain::value_objects::PipelineState;
use crate::infrastructure::fs::StagingAreaManager;

use super::result::{ProjectOutcome, ProjectReport};

pub(super) struct PackageRun<'a> {
    project: String,
    events: &'a dyn PackageEventSink,
    staging: &'a StagingAreaManager,
    state: PipelineState,
    trail: Vec<PipelineState>,
    scratch_dirs: Vec<PathBuf>,
    scratch_files: Vec<PathBuf>,
    failures: Vec<String>,
    asset_count: usize,
}

impl<'a> PackageRun<'a> {
    pub(super) fn new(
        project: &str,
        events: &'a dyn PackageEventSink,
        staging: &'a StagingAreaManager,
    ) -> Self {
        let run = Self {
            project: project.to_string(),
            events,
            staging,
            state: PipelineState::Discovered,
            trail: vec![PipelineState::Discovered],
            scratch_dirs: Vec::new(),
            scratch_files: Vec::new(),
            failures: Vec::new(),
            asset_count: 0,
        };
        run.emit_detailed(|| PackageEvent::StepEntered {
            project: run.project.clone(),
            state: PipelineState::Discovered,
        });
        run
    }

    pub(super) fn project(&self) -> &str {
        &self.project
    }

    pub(super) fn emit(&self, event: PackageEvent) {
        self.events.on_event(event);
    }

    /// Emit an event only when the sink asked for per-step detail
    pub(super) fn emit_detailed(&self, event: impl FnOnce() -> PackageEvent) {
        if self.events.wants_detailed_events() {
            self.events.on_event(event());
        }
    }

    /// Move to the next state. Terminal states are final.
    pub(super) fn advance(&mut self, next: PipelineState) {
        if self.state.is_terminal() {
            return;
        }
        self.state = next;
        self.trail.push(next);
        self.emit_detailed(|| PackageEvent::StepEntered {
            project: self.project.clone(),
            state: next,
        });
    }

    /// Remember a directory this run created (or is about to create)
    pub(super) fn track_dir(&mut self, path: PathBuf) {
        if !self.scratch_dirs.contains(&path) {
            self.scratch_dirs.push(path);
        }
    }

    /// Remember an intermediate file that must not outlive a failed run
    pub(super) fn track_file(&mut self, path: PathBuf) {
        if !self.scratch_files.contains(&path) {
            self.scratch_files.push(path);
        }
    }

    /// Stop tracking a file that no longer needs removal
    pub(super) fn forget_file(&mut self, path: &Path) {
        self.scratch_files.retain(|file| file != path);
    }

    /// Record a non-fatal problem; the project will finish as partial
    pub(super) fn note_failure(&mut self, failure: impl Into<String>) {
        self.failures.push(failure.into());
    }

    pub(super) fn set_asset_count(&mut self, count: usize) {
        self.asset_count = count;
    }

    /// Best-effort removal of every tracked scratch path
    pub(super) fn cleanup(&self) {
        for file in &self.scratch_files {
            if let Err(e) = self.staging.remove_file(file) {
                self.report_cleanup_failure(file, e);
            }
        }
        for dir in &self.scratch_dirs {
            if let Err(e) = self.staging.remove(dir) {
                self.report_cleanup_failure(dir, e);
            }
        }
    }

    /// `step` failed: clean up and end the project as `Failed`
    pub(super) fn fail(&mut self, step: PipelineState, error: impl Display) -> ProjectOutcome {
        let error = error.to_string();
        self.emit(PackageEvent::ProjectFailed {
            project: self.project.clone(),
            step,
            error: error.clone(),
        });
        self.cleanup();
        self.advance(PipelineState::Failed);
        ProjectOutcome::Failed { step, error }
    }

    /// Outcome of a pipeline that reached `Done`
    pub(super) fn completed(&self, artifact: Option<PackageArtifact>) -> ProjectOutcome {
        match artifact {
            Some(artifact) if self.failures.is_empty() => ProjectOutcome::Packaged { artifact },
            artifact => ProjectOutcome::Partial {
                artifact,
                failures: self.failures.clone(),
            },
        }
    }

    pub(super) fn into_report(self, package: &str, outcome: ProjectOutcome) -> ProjectReport {
        ProjectReport {
            project: self.project,
            package: package.to_string(),
            asset_count: self.asset_count,
            outcome,
            trail: self.trail,
        }
    }

    fn report_cleanup_failure(&self, path: &Path, error: impl Display) {
        self.emit(PackageEvent::CleanupFailed {
            path: path.to_path_buf(),
            error: error.to_string(),
        });
    }
}

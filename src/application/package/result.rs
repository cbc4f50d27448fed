//! Package result types

use std::path::PathBuf;

use crate::domain::entities::{PackageArtifact, SkippedSubtree};
use crate::domain::value_objects::{NameSet, PipelineState};

/// How one project's pipeline ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectOutcome {
    /// Every step succeeded
    Packaged { artifact: PackageArtifact },
    /// The pipeline ran to the end but something is missing from the package.
    ///
    /// `artifact` is `None` when the outer archive was not produced.
    Partial {
        artifact: Option<PackageArtifact>,
        failures: Vec<String>,
    },
    /// No asset files; any earlier output for the project was removed
    SkippedEmpty,
    /// The project folder could not be read
    SkippedUnreadable { error: String },
    /// A step failed and the project's staging was cleaned up
    Failed { step: PipelineState, error: String },
}

impl ProjectOutcome {
    pub fn artifact(&self) -> Option<&PackageArtifact> {
        match self {
            ProjectOutcome::Packaged { artifact } => Some(artifact),
            ProjectOutcome::Partial { artifact, .. } => artifact.as_ref(),
            _ => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            ProjectOutcome::SkippedEmpty | ProjectOutcome::SkippedUnreadable { .. }
        )
    }

    /// Short label for summaries
    pub fn label(&self) -> &'static str {
        match self {
            ProjectOutcome::Packaged { .. } => "packaged",
            ProjectOutcome::Partial { .. } => "partial",
            ProjectOutcome::SkippedEmpty => "skipped (no assets)",
            ProjectOutcome::SkippedUnreadable { .. } => "skipped (unreadable)",
            ProjectOutcome::Failed { .. } => "failed",
        }
    }
}

/// One project's run record
#[derive(Debug, Clone)]
pub struct ProjectReport {
    /// Project folder name
    pub project: String,
    /// `dlc_<slug>` package directory name
    pub package: String,
    pub asset_count: usize,
    pub outcome: ProjectOutcome,
    /// Every state the project passed through, in order
    pub trail: Vec<PipelineState>,
}

/// Result of a packaging run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub projects: Vec<ProjectReport>,
    /// `--project` names that matched no folder
    pub unmatched: Vec<String>,
    /// Set when the input root could not be listed
    pub fatal: Option<String>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A run that ended before any project was processed
    pub fn fatal(error: impl Into<String>) -> Self {
        Self {
            fatal: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn add_project(&mut self, report: ProjectReport) {
        self.projects.push(report);
    }

    pub fn packaged_count(&self) -> usize {
        self.count(|o| matches!(o, ProjectOutcome::Packaged { .. }))
    }

    pub fn partial_count(&self) -> usize {
        self.count(|o| matches!(o, ProjectOutcome::Partial { .. }))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(ProjectOutcome::is_skipped)
    }

    pub fn failed_count(&self) -> usize {
        self.count(|o| matches!(o, ProjectOutcome::Failed { .. }))
    }

    /// True when every processed project packaged cleanly or was skipped
    pub fn is_clean(&self) -> bool {
        self.fatal.is_none() && self.partial_count() == 0 && self.failed_count() == 0
    }

    fn count(&self, predicate: impl Fn(&ProjectOutcome) -> bool) -> usize {
        self.projects.iter().filter(|p| predicate(&p.outcome)).count()
    }
}

/// Dry-run view of one project
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    pub project: String,
    pub names: NameSet,
    pub package_dir: PathBuf,
    pub asset_count: usize,
    /// Assets whose file name is already taken by an earlier asset
    pub name_collisions: Vec<PathBuf>,
    pub skipped: Vec<SkippedSubtree>,
}

impl ProjectPlan {
    /// The project would produce no package
    pub fn will_skip(&self) -> bool {
        self.asset_count == 0
    }
}

/// Dry-run result
#[derive(Debug, Clone, Default)]
pub struct PlanReport {
    pub projects: Vec<ProjectPlan>,
    pub unmatched: Vec<String>,
    /// Input root entries that could not be inspected
    pub skipped_entries: Vec<SkippedSubtree>,
}

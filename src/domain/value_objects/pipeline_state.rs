//! Per-project pipeline states

use serde::Serialize;

/// Position of one project in the packaging pipeline.
///
/// Happy path, strictly in order:
/// `Discovered → NamesDerived → AssetsScanned → InnerStaged →
/// InnerArchiveBuilt → Relocated → ManifestsRendered → OuterArchiveBuilt →
/// CleanedUp → Done`.
///
/// `SkippedEmpty` branches off `AssetsScanned`; `Failed` can be entered from
/// any step that touches the file system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Discovered,
    NamesDerived,
    AssetsScanned,
    SkippedEmpty,
    InnerStaged,
    InnerArchiveBuilt,
    Relocated,
    ManifestsRendered,
    OuterArchiveBuilt,
    CleanedUp,
    Done,
    Failed,
}

impl PipelineState {
    /// Terminal states end the project's pipeline
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PipelineState::Done | PipelineState::SkippedEmpty | PipelineState::Failed
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Discovered => "discovered",
            PipelineState::NamesDerived => "names_derived",
            PipelineState::AssetsScanned => "assets_scanned",
            PipelineState::SkippedEmpty => "skipped_empty",
            PipelineState::InnerStaged => "inner_staged",
            PipelineState::InnerArchiveBuilt => "inner_archive_built",
            PipelineState::Relocated => "relocated",
            PipelineState::ManifestsRendered => "manifests_rendered",
            PipelineState::OuterArchiveBuilt => "outer_archive_built",
            PipelineState::CleanedUp => "cleaned_up",
            PipelineState::Done => "done",
            PipelineState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Package Use Case
//!
//! Drives every discovered project through the packaging pipeline, one at a
//! time. A project's failure never stops the run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{AssetScan, MappingProject, PackageArtifact, PackageLayout};
use crate::domain::ports::{ArchiveBuilder, Clock, PackageEvent, PackageEventSink};
use crate::domain::services::ManifestTemplateEngine;
use crate::domain::value_objects::{NameSet, PipelineState};
use crate::error::MapDlcResult;
use crate::infrastructure::fs::{
    AssetScanner, CopyOutcome, ProjectDiscovery, ProjectListing, StagingAreaManager,
};

use super::options::PackageOptions;
use super::result::{PlanReport, ProjectOutcome, ProjectPlan, ProjectReport, RunReport};
use super::run::PackageRun;

/// Package use case - turns mapping folders into DLC packages
pub struct PackageUseCase<B, C>
where
    B: ArchiveBuilder,
    C: Clock,
{
    builder: B,
    clock: C,
    scanner: AssetScanner,
    staging: StagingAreaManager,
    manifests: ManifestTemplateEngine,
}

impl<B, C> PackageUseCase<B, C>
where
    B: ArchiveBuilder,
    C: Clock,
{
    pub fn new(
        builder: B,
        clock: C,
        scanner: AssetScanner,
        manifests: ManifestTemplateEngine,
    ) -> Self {
        Self {
            builder,
            clock,
            scanner,
            staging: StagingAreaManager::new(),
            manifests,
        }
    }

    /// Package every selected project.
    ///
    /// An unreadable input root is reported through `RunFatal` and
    /// `RunReport::fatal`; nothing else ends the run early.
    pub fn execute(&self, options: &PackageOptions, events: &dyn PackageEventSink) -> RunReport {
        let listing = match self.discover(options) {
            Ok(listing) => listing,
            Err(e) => {
                events.on_event(PackageEvent::RunFatal {
                    path: options.input_root.clone(),
                    error: e.to_string(),
                });
                return RunReport::fatal(e.to_string());
            }
        };

        let (projects, unmatched) = options.select(listing.projects);
        let mut report = RunReport::new();
        report.unmatched = unmatched;

        events.on_event(PackageEvent::RunStarted {
            input: options.input_root.clone(),
            output: options.output_root.clone(),
            project_count: projects.len(),
        });
        for skipped in listing.skipped {
            events.on_event(PackageEvent::EntrySkipped {
                path: skipped.path,
                reason: skipped.reason.to_string(),
            });
        }

        for (index, project) in projects.iter().enumerate() {
            report.add_project(self.process_project(index, project, options, events));
        }

        events.on_event(PackageEvent::RunCompleted {
            packaged: report.packaged_count(),
            partial: report.partial_count(),
            skipped: report.skipped_count(),
            failed: report.failed_count(),
        });

        report
    }

    /// Dry run: discovery, naming and scanning only. Writes nothing.
    pub fn plan(&self, options: &PackageOptions) -> MapDlcResult<PlanReport> {
        let listing = self.discover(options)?;
        let (projects, unmatched) = options.select(listing.projects);

        let projects = projects
            .iter()
            .map(|project| {
                let names = project.names().with_level_hash(options.level_hash.as_str());
                let layout = PackageLayout::new(&options.output_root, &names, &options.naming);
                let scan = self.scanner.scan(project.path());
                ProjectPlan {
                    project: project.folder_name().to_string(),
                    package_dir: layout.package_dir().to_path_buf(),
                    asset_count: scan.len(),
                    name_collisions: name_collisions(&scan),
                    skipped: scan.skipped,
                    names,
                }
            })
            .collect();

        Ok(PlanReport {
            projects,
            unmatched,
            skipped_entries: listing.skipped,
        })
    }

    fn discover(&self, options: &PackageOptions) -> MapDlcResult<ProjectListing> {
        ProjectDiscovery::new(&options.input_root)
            .excluding(&options.output_root)
            .list_projects()
    }

    fn process_project(
        &self,
        index: usize,
        project: &MappingProject,
        options: &PackageOptions,
        events: &dyn PackageEventSink,
    ) -> ProjectReport {
        let names = project.names().with_level_hash(options.level_hash.as_str());
        let layout = PackageLayout::new(&options.output_root, &names, &options.naming);

        events.on_event(PackageEvent::ProjectStarted {
            index,
            project: project.folder_name().to_string(),
            package: names.package_name_lower().to_string(),
        });

        let mut run = PackageRun::new(project.folder_name(), events, &self.staging);
        let outcome = self.run_pipeline(&mut run, project, &names, &layout, options);
        run.into_report(names.package_name_lower(), outcome)
    }

    fn run_pipeline(
        &self,
        run: &mut PackageRun<'_>,
        project: &MappingProject,
        names: &NameSet,
        layout: &PackageLayout,
        options: &PackageOptions,
    ) -> ProjectOutcome {
        if names.is_empty() {
            return run.fail(
                PipelineState::NamesDerived,
                "folder name has no letters or digits to build a package name from",
            );
        }
        run.advance(PipelineState::NamesDerived);

        let scan = self.scanner.scan(project.path());
        if let Some(error) = unreadable_root(&scan, project.path()) {
            run.emit(PackageEvent::ProjectSkipped {
                project: run.project().to_string(),
                reason: format!("cannot read project folder: {}", error),
            });
            return ProjectOutcome::SkippedUnreadable { error };
        }
        for skipped in &scan.skipped {
            run.emit(PackageEvent::ScanSkipped {
                project: run.project().to_string(),
                path: skipped.path.clone(),
                reason: skipped.reason.to_string(),
                unexpected: skipped.reason.is_unexpected(),
            });
        }

        run.set_asset_count(scan.len());
        run.advance(PipelineState::AssetsScanned);
        run.emit(PackageEvent::AssetsFound {
            project: run.project().to_string(),
            count: scan.len(),
        });

        if scan.is_empty() {
            return self.skip_empty(run, layout);
        }

        if let Err(e) = self.stage_assets(run, layout, &scan) {
            return run.fail(PipelineState::InnerStaged, e);
        }
        run.advance(PipelineState::InnerStaged);

        let inner_built = self.build_archive(
            run,
            &layout.assets_staging(),
            layout.package_dir(),
            layout.inner_name(),
            layout.extension(),
        );
        run.advance(PipelineState::InnerArchiveBuilt);

        if let Err(e) = self.relocate_inner(run, layout, inner_built) {
            return run.fail(PipelineState::Relocated, e);
        }
        run.advance(PipelineState::Relocated);

        if let Err(e) = self.render_manifests(names, layout) {
            return run.fail(PipelineState::ManifestsRendered, e);
        }
        run.advance(PipelineState::ManifestsRendered);

        self.build_archive(
            run,
            &layout.package_staging(),
            layout.package_dir(),
            layout.outer_name(),
            layout.extension(),
        );
        run.advance(PipelineState::OuterArchiveBuilt);

        if !options.keep_staging {
            run.cleanup();
        }
        run.advance(PipelineState::CleanedUp);
        run.advance(PipelineState::Done);

        let archive = layout.outer_archive();
        let artifact = archive.is_file().then(|| PackageArtifact {
            directory: layout.package_dir().to_path_buf(),
            archive,
        });
        let outcome = run.completed(artifact);

        run.emit(PackageEvent::ProjectPackaged {
            project: run.project().to_string(),
            artifact: layout.package_dir().to_path_buf(),
            partial: matches!(outcome, ProjectOutcome::Partial { .. }),
        });
        outcome
    }

    /// No assets: drop whatever an earlier run left for this project
    fn skip_empty(&self, run: &mut PackageRun<'_>, layout: &PackageLayout) -> ProjectOutcome {
        if let Err(e) = self.staging.remove(layout.package_dir()) {
            run.emit(PackageEvent::CleanupFailed {
                path: layout.package_dir().to_path_buf(),
                error: e.to_string(),
            });
        }
        run.advance(PipelineState::SkippedEmpty);
        run.emit(PackageEvent::ProjectSkipped {
            project: run.project().to_string(),
            reason: "no asset files found".to_string(),
        });
        ProjectOutcome::SkippedEmpty
    }

    /// Clear leftovers from an interrupted run, then flatten assets into
    /// `temp_assets/`. The first asset with a given file name wins.
    fn stage_assets(
        &self,
        run: &mut PackageRun<'_>,
        layout: &PackageLayout,
        scan: &AssetScan,
    ) -> MapDlcResult<()> {
        for dir in layout.staging_dirs() {
            self.staging.remove(&dir)?;
        }
        self.staging.remove_file(&layout.inner_archive_built())?;
        self.staging.remove_file(&layout.outer_archive())?;

        let assets_dir = layout.assets_staging();
        run.track_dir(assets_dir.clone());
        run.track_file(layout.inner_archive_built());
        self.staging.ensure(&assets_dir)?;

        for asset in &scan.assets {
            match self.staging.copy_into(asset.path(), &assets_dir) {
                Ok(CopyOutcome::Copied(_)) => {}
                Ok(CopyOutcome::AlreadyExists(_)) => {
                    run.emit_detailed(|| PackageEvent::AssetNameCollision {
                        project: run.project().to_string(),
                        path: asset.path().to_path_buf(),
                    });
                }
                Err(e) => {
                    run.emit(PackageEvent::AssetCopyFailed {
                        project: run.project().to_string(),
                        path: asset.path().to_path_buf(),
                        error: e.to_string(),
                    });
                    run.note_failure(format!("asset {} was not staged", asset.path().display()));
                }
            }
        }

        Ok(())
    }

    /// Run the archive tool once. A failed build is recorded, not raised.
    fn build_archive(
        &self,
        run: &mut PackageRun<'_>,
        input_dir: &Path,
        output_dir: &Path,
        name: &str,
        extension: &str,
    ) -> bool {
        let outcome = self.builder.build(input_dir, output_dir, name);
        if !outcome.succeeded {
            let archive = format!("{}.{}", name, extension);
            run.emit(PackageEvent::ArchiveBuildFailed {
                project: run.project().to_string(),
                archive: archive.clone(),
                diagnostic: outcome.diagnostic,
            });
            run.note_failure(format!("archive {} was not built", archive));
        }
        outcome.succeeded
    }

    /// Move the inner archive under `temp_package/<platform>/`.
    ///
    /// Afterwards nothing may be left at the built path: for a project whose
    /// slug equals the outer archive name it is the final package's path.
    fn relocate_inner(
        &self,
        run: &mut PackageRun<'_>,
        layout: &PackageLayout,
        inner_built: bool,
    ) -> MapDlcResult<()> {
        run.track_dir(layout.package_staging());
        self.staging.ensure(&layout.platform_dir())?;

        let built = layout.inner_archive_built();
        if inner_built {
            self.staging.relocate(&built, &layout.inner_archive_staged())?;
        } else {
            // a failed tool may still leave a partial file behind
            self.staging.remove_file(&built)?;
        }
        run.forget_file(&built);
        Ok(())
    }

    fn render_manifests(&self, names: &NameSet, layout: &PackageLayout) -> MapDlcResult<()> {
        let content = self
            .manifests
            .render_content_manifest(names, names.level_hash());
        let setup = self
            .manifests
            .render_setup_manifest(names, self.clock.now());

        self.staging.write_file(&layout.content_manifest(), &content)?;
        self.staging.write_file(&layout.setup_manifest(), &setup)
    }
}

/// The scanner could not open the project folder itself
fn unreadable_root(scan: &AssetScan, root: &Path) -> Option<String> {
    scan.skipped
        .iter()
        .find(|s| s.path.as_path() == root)
        .map(|s| s.reason.to_string())
}

/// Assets that lose to an earlier asset with the same file name.
///
/// Mirrors staging order, which walks `scan.assets` in sorted order.
fn name_collisions(scan: &AssetScan) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    scan.assets
        .iter()
        .filter(|asset| match asset.file_name() {
            Some(name) => !seen.insert(name.to_os_string()),
            None => false,
        })
        .map(|asset| asset.path().to_path_buf())
        .collect()
}

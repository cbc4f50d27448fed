//! Package Use Case Tests

use super::*;
use crate::domain::entities::STAGING_PREFIX;
use crate::domain::ports::{
    ArchiveBuilder, ArchiveOutcome, FixedClock, NoopEventSink, PackageEvent, PackageEventSink,
};
use crate::domain::services::ManifestTemplateEngine;
use crate::domain::value_objects::PipelineState;
use crate::infrastructure::fs::AssetScanner;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

// Fakes

/// One recorded archive build: archive name plus the files it was fed
#[derive(Debug, Clone)]
struct BuildCall {
    name: String,
    contents: Vec<String>,
}

/// Writes `<name>.rpf` listing the input files, or fails for names in `failing`
struct FakeArchiveBuilder {
    failing: HashSet<String>,
    calls: RefCell<Vec<BuildCall>>,
}

impl FakeArchiveBuilder {
    fn new() -> Self {
        Self {
            failing: HashSet::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    fn failing_on(name: &str) -> Self {
        let mut builder = Self::new();
        builder.failing.insert(name.to_string());
        builder
    }

    fn call(&self, name: &str) -> BuildCall {
        self.calls
            .borrow()
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .unwrap_or_else(|| panic!("no build call for {}", name))
    }
}

impl ArchiveBuilder for FakeArchiveBuilder {
    fn name(&self) -> &str {
        "fake"
    }

    fn extension(&self) -> &str {
        "rpf"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn build(&self, input_dir: &Path, output_dir: &Path, archive_name: &str) -> ArchiveOutcome {
        let contents = list_files(input_dir);
        self.calls.borrow_mut().push(BuildCall {
            name: archive_name.to_string(),
            contents: contents.clone(),
        });

        if self.failing.contains(archive_name) {
            return ArchiveOutcome::failure("fake tool refused");
        }

        let target = output_dir.join(format!("{}.rpf", archive_name));
        match fs::write(&target, contents.join("\n")) {
            Ok(()) => ArchiveOutcome::success(""),
            Err(e) => ArchiveOutcome::failure(e.to_string()),
        }
    }
}

struct RecordingEventSink {
    events: RefCell<Vec<PackageEvent>>,
}

impl RecordingEventSink {
    fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    fn events(&self) -> Vec<PackageEvent> {
        self.events.borrow().clone()
    }

    fn steps(&self, project: &str) -> Vec<PipelineState> {
        self.events
            .borrow()
            .iter()
            .filter_map(|e| match e {
                PackageEvent::StepEntered { project: p, state } if p == project => Some(*state),
                _ => None,
            })
            .collect()
    }
}

impl PackageEventSink for RecordingEventSink {
    fn on_event(&self, event: PackageEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Records events, running `hook` on each one first
struct HookedEventSink<F: Fn(&PackageEvent)> {
    recorder: RecordingEventSink,
    hook: F,
}

impl<F: Fn(&PackageEvent)> HookedEventSink<F> {
    fn new(hook: F) -> Self {
        Self {
            recorder: RecordingEventSink::new(),
            hook,
        }
    }

    fn events(&self) -> Vec<PackageEvent> {
        self.recorder.events()
    }
}

impl<F: Fn(&PackageEvent)> PackageEventSink for HookedEventSink<F> {
    fn on_event(&self, event: PackageEvent) {
        (self.hook)(&event);
        self.recorder.on_event(event);
    }
}

fn entered(event: &PackageEvent, step: PipelineState) -> bool {
    matches!(event, PackageEvent::StepEntered { state, .. } if *state == step)
}

// Helpers

/// Names of `temp_*` entries still inside a package directory
fn staging_leftovers(package_dir: &Path) -> Vec<String> {
    fs::read_dir(package_dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .filter(|name| name.starts_with(STAGING_PREFIX))
                .collect()
        })
        .unwrap_or_default()
}

fn list_files(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                walk(root, &path, out);
            } else if let Ok(rel) = path.strip_prefix(root) {
                out.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"asset").unwrap();
}

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap(),
    )
}

fn use_case(builder: &FakeArchiveBuilder) -> PackageUseCase<&FakeArchiveBuilder, FixedClock> {
    PackageUseCase::new(
        builder,
        clock(),
        AssetScanner::default(),
        ManifestTemplateEngine::builtin("rpf").unwrap(),
    )
}

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("mappings")).unwrap();
        Self { dir }
    }

    fn input(&self) -> PathBuf {
        self.dir.path().join("mappings")
    }

    fn output(&self) -> PathBuf {
        self.dir.path().join("output")
    }

    fn asset(&self, project: &str, rel: &str) {
        touch(&self.input().join(project).join(rel));
    }

    fn project_dir(&self, project: &str) {
        fs::create_dir_all(self.input().join(project)).unwrap();
    }

    fn options(&self) -> PackageOptions {
        PackageOptions::new(self.input(), self.output())
    }
}

fn happy_path() -> Vec<PipelineState> {
    vec![
        PipelineState::Discovered,
        PipelineState::NamesDerived,
        PipelineState::AssetsScanned,
        PipelineState::InnerStaged,
        PipelineState::InnerArchiveBuilt,
        PipelineState::Relocated,
        PipelineState::ManifestsRendered,
        PipelineState::OuterArchiveBuilt,
        PipelineState::CleanedUp,
        PipelineState::Done,
    ]
}

// Tests

#[test]
fn packages_project_into_nested_archives() {
    let ws = Workspace::new();
    ws.asset("Test Area", "props/deep/test.ymap");
    ws.asset("Test Area", "tex.ytd");
    ws.asset("Test Area", "readme.txt");
    let builder = FakeArchiveBuilder::new();

    let report = use_case(&builder).execute(&ws.options(), &NoopEventSink);

    let package_dir = ws.output().join("dlc_testarea");
    assert_eq!(report.projects.len(), 1);
    let project = &report.projects[0];
    assert_eq!(project.package, "dlc_testarea");
    assert_eq!(project.asset_count, 2);
    assert_eq!(
        project.outcome,
        ProjectOutcome::Packaged {
            artifact: crate::domain::entities::PackageArtifact {
                directory: package_dir.clone(),
                archive: package_dir.join("dlc.rpf"),
            }
        }
    );
    assert_eq!(project.trail, happy_path());

    assert_eq!(builder.call("testarea").contents, vec!["test.ymap", "tex.ytd"]);
    assert_eq!(
        builder.call("dlc").contents,
        vec!["content.xml", "setup2.xml", "x64/testarea.rpf"]
    );

    assert_eq!(list_files(&package_dir), vec!["dlc.rpf"]);
    assert!(report.is_clean());
}

#[test]
fn keep_staging_leaves_rendered_manifests() {
    let ws = Workspace::new();
    ws.asset("Test Area", "test.ymap");
    let builder = FakeArchiveBuilder::new();
    let options = ws
        .options()
        .with_keep_staging(true)
        .with_level_hash("custom_level");

    use_case(&builder).execute(&options, &NoopEventSink);

    let staging = ws.output().join("dlc_testarea/temp_package");
    let content = fs::read_to_string(staging.join("content.xml")).unwrap();
    let setup = fs::read_to_string(staging.join("setup2.xml")).unwrap();

    assert!(content.contains("<filename>dlc_testarea:/%PLATFORM%/testarea.rpf</filename>"));
    assert!(content.contains("<associatedMap>custom_level</associatedMap>"));
    assert!(content.contains("<changeSetName>DLC_TESTAREA_AUTOGEN</changeSetName>"));
    assert!(!content.contains("{{"));
    assert!(setup.contains("<deviceName>dlc_testarea</deviceName>"));
    assert!(setup.contains("<timeStamp>10/19/2026 03:04:05 PM</timeStamp>"));
    assert!(staging.join("x64/testarea.rpf").is_file());
    assert!(ws.output().join("dlc_testarea/temp_assets/test.ymap").is_file());
}

#[test]
fn empty_project_is_skipped_and_old_output_removed() {
    let ws = Workspace::new();
    ws.asset("Empty", "notes.txt");
    touch(&ws.output().join("dlc_empty/dlc.rpf"));
    let builder = FakeArchiveBuilder::new();
    let sink = RecordingEventSink::new();

    let report = use_case(&builder).execute(&ws.options(), &sink);

    assert_eq!(report.projects[0].outcome, ProjectOutcome::SkippedEmpty);
    assert_eq!(
        report.projects[0].trail.last(),
        Some(&PipelineState::SkippedEmpty)
    );
    assert!(!ws.output().join("dlc_empty").exists());
    assert!(builder.calls.borrow().is_empty());
    assert!(sink
        .events()
        .iter()
        .any(|e| matches!(e, PackageEvent::ProjectSkipped { project, .. } if project == "Empty")));
}

#[test]
fn unreadable_input_root_is_fatal_but_not_an_error() {
    let dir = tempdir().unwrap();
    let builder = FakeArchiveBuilder::new();
    let sink = RecordingEventSink::new();
    let options = PackageOptions::new(dir.path().join("missing"), dir.path().join("output"));

    let report = use_case(&builder).execute(&options, &sink);

    assert!(report.fatal.is_some());
    assert!(report.projects.is_empty());
    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], PackageEvent::RunFatal { .. }));
    assert!(!dir.path().join("output").exists());
}

#[test]
fn inner_build_failure_is_partial_and_pipeline_continues() {
    let ws = Workspace::new();
    ws.asset("Test Area", "test.ymap");
    let builder = FakeArchiveBuilder::failing_on("testarea");
    let sink = RecordingEventSink::new();

    let report = use_case(&builder).execute(&ws.options(), &sink);

    let project = &report.projects[0];
    match &project.outcome {
        ProjectOutcome::Partial { artifact, failures } => {
            assert!(artifact.is_some());
            assert_eq!(failures, &vec!["archive testarea.rpf was not built".to_string()]);
        }
        other => panic!("expected partial, got {:?}", other),
    }
    assert_eq!(project.trail, happy_path());
    assert_eq!(
        builder.call("dlc").contents,
        vec!["content.xml", "setup2.xml"]
    );
    assert!(sink.events().iter().any(|e| matches!(
        e,
        PackageEvent::ArchiveBuildFailed { archive, .. } if archive == "testarea.rpf"
    )));
    assert!(sink.events().iter().any(|e| matches!(
        e,
        PackageEvent::ProjectPackaged { partial: true, .. }
    )));
    assert_eq!(report.partial_count(), 1);
}

#[test]
fn outer_build_failure_leaves_no_artifact() {
    let ws = Workspace::new();
    ws.asset("Test Area", "test.ymap");
    touch(&ws.output().join("dlc_testarea/dlc.rpf"));
    let builder = FakeArchiveBuilder::failing_on("dlc");

    let report = use_case(&builder).execute(&ws.options(), &NoopEventSink);

    match &report.projects[0].outcome {
        ProjectOutcome::Partial { artifact, .. } => assert!(artifact.is_none()),
        other => panic!("expected partial, got {:?}", other),
    }
    // the stale archive from an earlier run must not survive
    assert!(!ws.output().join("dlc_testarea/dlc.rpf").exists());
    assert!(!ws.output().join("dlc_testarea/temp_package").exists());
}

#[test]
fn staging_failure_fails_only_that_project() {
    let ws = Workspace::new();
    ws.asset("Alpha", "a.ymap");
    ws.asset("Beta", "b.ymap");
    // a file where Alpha's package directory should be
    touch(&ws.output().join("dlc_alpha"));
    let builder = FakeArchiveBuilder::new();
    let sink = RecordingEventSink::new();

    let report = use_case(&builder).execute(&ws.options(), &sink);

    assert_eq!(report.projects.len(), 2);
    match &report.projects[0].outcome {
        ProjectOutcome::Failed { step, .. } => assert_eq!(*step, PipelineState::InnerStaged),
        other => panic!("expected failure, got {:?}", other),
    }
    assert_eq!(
        report.projects[0].trail.last(),
        Some(&PipelineState::Failed)
    );
    assert!(matches!(
        report.projects[1].outcome,
        ProjectOutcome::Packaged { .. }
    ));
    assert!(sink.events().iter().any(|e| matches!(
        e,
        PackageEvent::ProjectFailed { project, step: PipelineState::InnerStaged, .. } if project == "Alpha"
    )));
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.packaged_count(), 1);
}

#[test]
fn project_named_after_outer_archive_keeps_its_package() {
    let ws = Workspace::new();
    ws.asset("DLC", "a.ymap");
    let builder = FakeArchiveBuilder::new();

    let report = use_case(&builder).execute(&ws.options(), &NoopEventSink);

    let package_dir = ws.output().join("dlc_dlc");
    assert_eq!(
        report.projects[0].outcome,
        ProjectOutcome::Packaged {
            artifact: crate::domain::entities::PackageArtifact {
                directory: package_dir.clone(),
                archive: package_dir.join("dlc.rpf"),
            }
        }
    );
    let calls = builder.calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].contents, vec!["a.ymap"]);
    assert_eq!(
        calls[1].contents,
        vec!["content.xml", "setup2.xml", "x64/dlc.rpf"]
    );
    assert_eq!(list_files(&package_dir), vec!["dlc.rpf"]);
}

#[test]
fn asset_copy_failure_is_partial_and_keeps_the_rest() {
    let ws = Workspace::new();
    ws.asset("Test Area", "a.ymap");
    ws.asset("Test Area", "b.ymap");
    let vanishing = ws.input().join("Test Area/b.ymap");
    let builder = FakeArchiveBuilder::new();
    // delete one asset between the scan and staging
    let sink = HookedEventSink::new(|event| {
        if matches!(event, PackageEvent::AssetsFound { .. }) {
            fs::remove_file(&vanishing).unwrap();
        }
    });

    let report = use_case(&builder).execute(&ws.options(), &sink);

    let package_dir = ws.output().join("dlc_testarea");
    match &report.projects[0].outcome {
        ProjectOutcome::Partial { artifact, failures } => {
            assert!(artifact.is_some());
            assert_eq!(failures.len(), 1);
            assert!(failures[0].contains("b.ymap"));
        }
        other => panic!("expected partial, got {:?}", other),
    }
    assert_eq!(report.projects[0].trail, happy_path());
    assert_eq!(builder.call("testarea").contents, vec!["a.ymap"]);
    assert!(sink.events().iter().any(|e| matches!(
        e,
        PackageEvent::AssetCopyFailed { path, .. } if path.ends_with("b.ymap")
    )));
    assert!(sink.events().iter().any(|e| matches!(
        e,
        PackageEvent::ProjectPackaged { partial: true, .. }
    )));
    assert!(staging_leftovers(&package_dir).is_empty());
    assert_eq!(list_files(&package_dir), vec!["dlc.rpf"]);
}

#[test]
fn relocation_failure_removes_both_staging_dirs() {
    let ws = Workspace::new();
    ws.asset("Test Area", "test.ymap");
    let package_dir = ws.output().join("dlc_testarea");
    let platform_blocker = package_dir.join("temp_package/x64");
    let builder = FakeArchiveBuilder::new();
    // a file where the platform folder must be created
    let sink = HookedEventSink::new(|event| {
        if entered(event, PipelineState::InnerArchiveBuilt) {
            touch(&platform_blocker);
        }
    });

    let report = use_case(&builder).execute(&ws.options(), &sink);

    let project = &report.projects[0];
    assert!(matches!(
        project.outcome,
        ProjectOutcome::Failed {
            step: PipelineState::Relocated,
            ..
        }
    ));
    assert_eq!(project.trail.last(), Some(&PipelineState::Failed));
    assert!(sink.events().iter().any(|e| matches!(
        e,
        PackageEvent::ProjectFailed { step: PipelineState::Relocated, .. }
    )));
    assert_eq!(builder.calls.borrow().len(), 1);
    assert!(staging_leftovers(&package_dir).is_empty());
    assert!(list_files(&package_dir).is_empty());
}

#[test]
fn manifest_write_failure_removes_both_staging_dirs() {
    let ws = Workspace::new();
    ws.asset("Test Area", "test.ymap");
    let package_dir = ws.output().join("dlc_testarea");
    let manifest_blocker = package_dir.join("temp_package/content.xml");
    let builder = FakeArchiveBuilder::new();
    // a directory where content.xml must be written
    let sink = HookedEventSink::new(|event| {
        if entered(event, PipelineState::Relocated) {
            fs::create_dir_all(&manifest_blocker).unwrap();
        }
    });

    let report = use_case(&builder).execute(&ws.options(), &sink);

    let project = &report.projects[0];
    assert!(matches!(
        project.outcome,
        ProjectOutcome::Failed {
            step: PipelineState::ManifestsRendered,
            ..
        }
    ));
    assert!(sink.events().iter().any(|e| matches!(
        e,
        PackageEvent::ProjectFailed { step: PipelineState::ManifestsRendered, .. }
    )));
    assert_eq!(builder.calls.borrow().len(), 1);
    assert!(staging_leftovers(&package_dir).is_empty());
    assert!(list_files(&package_dir).is_empty());
}

#[test]
fn stale_staging_is_cleared_before_copying() {
    let ws = Workspace::new();
    ws.asset("Test Area", "test.ymap");
    touch(&ws.output().join("dlc_testarea/temp_assets/old.ydr"));
    touch(&ws.output().join("dlc_testarea/temp_package/x64/old.rpf"));
    let builder = FakeArchiveBuilder::new();

    use_case(&builder).execute(&ws.options(), &NoopEventSink);

    assert_eq!(builder.call("testarea").contents, vec!["test.ymap"]);
    assert_eq!(
        builder.call("dlc").contents,
        vec!["content.xml", "setup2.xml", "x64/testarea.rpf"]
    );
}

#[test]
fn duplicate_file_names_keep_the_first_asset() {
    let ws = Workspace::new();
    ws.asset("Dupes", "a/same.ymap");
    ws.asset("Dupes", "b/same.ymap");
    let builder = FakeArchiveBuilder::new();
    let sink = RecordingEventSink::new();

    let report = use_case(&builder).execute(&ws.options(), &sink);

    assert_eq!(report.projects[0].asset_count, 2);
    assert_eq!(builder.call("dupes").contents, vec!["same.ymap"]);
    let collisions: Vec<PathBuf> = sink
        .events()
        .into_iter()
        .filter_map(|e| match e {
            PackageEvent::AssetNameCollision { path, .. } => Some(path),
            _ => None,
        })
        .collect();
    assert_eq!(collisions.len(), 1);
    assert!(collisions[0].ends_with("b/same.ymap"));
}

#[test]
fn detailed_sink_sees_every_step_in_order() {
    let ws = Workspace::new();
    ws.asset("Test Area", "test.ymap");
    let builder = FakeArchiveBuilder::new();
    let sink = RecordingEventSink::new();

    use_case(&builder).execute(&ws.options(), &sink);

    assert_eq!(sink.steps("Test Area"), happy_path());
}

#[test]
fn projects_run_in_folder_name_order() {
    let ws = Workspace::new();
    ws.asset("Zeta", "z.ymap");
    ws.asset("Alpha", "a.ymap");
    ws.project_dir("Middle");
    let builder = FakeArchiveBuilder::new();

    let report = use_case(&builder).execute(&ws.options(), &NoopEventSink);

    let order: Vec<&str> = report.projects.iter().map(|p| p.project.as_str()).collect();
    assert_eq!(order, vec!["Alpha", "Middle", "Zeta"]);
    assert_eq!(report.skipped_count(), 1);
    assert_eq!(report.packaged_count(), 2);
}

#[test]
fn project_filter_limits_the_run() {
    let ws = Workspace::new();
    ws.asset("Alpha", "a.ymap");
    ws.asset("Beta", "b.ymap");
    let builder = FakeArchiveBuilder::new();
    let options = ws.options().with_projects(["Beta", "Gamma"]);

    let report = use_case(&builder).execute(&options, &NoopEventSink);

    assert_eq!(report.projects.len(), 1);
    assert_eq!(report.projects[0].project, "Beta");
    assert_eq!(report.unmatched, vec!["Gamma".to_string()]);
    assert!(!ws.output().join("dlc_alpha").exists());
}

#[test]
fn folder_without_usable_characters_fails_at_naming() {
    let ws = Workspace::new();
    ws.asset("___", "a.ymap");
    let builder = FakeArchiveBuilder::new();

    let report = use_case(&builder).execute(&ws.options(), &NoopEventSink);

    assert!(matches!(
        report.projects[0].outcome,
        ProjectOutcome::Failed {
            step: PipelineState::NamesDerived,
            ..
        }
    ));
    assert!(builder.calls.borrow().is_empty());
}

#[test]
fn output_root_inside_input_root_is_not_a_project() {
    let ws = Workspace::new();
    ws.asset("Test Area", "test.ymap");
    let output = ws.input().join("out");
    fs::create_dir_all(&output).unwrap();
    let builder = FakeArchiveBuilder::new();
    let options = PackageOptions::new(ws.input(), &output);

    let report = use_case(&builder).execute(&options, &NoopEventSink);

    let names: Vec<&str> = report.projects.iter().map(|p| p.project.as_str()).collect();
    assert_eq!(names, vec!["Test Area"]);
}

#[test]
fn plan_reports_without_touching_output() {
    let ws = Workspace::new();
    ws.asset("Test Area", "a/same.ymap");
    ws.asset("Test Area", "b/same.ymap");
    ws.asset("Test Area", "tex.ytd");
    ws.project_dir("Empty");
    let builder = FakeArchiveBuilder::new();

    let plan = use_case(&builder).plan(&ws.options()).unwrap();

    assert_eq!(plan.projects.len(), 2);
    let empty = &plan.projects[0];
    assert_eq!(empty.project, "Empty");
    assert!(empty.will_skip());

    let area = &plan.projects[1];
    assert_eq!(area.names.package_name_lower(), "dlc_testarea");
    assert_eq!(area.package_dir, ws.output().join("dlc_testarea"));
    assert_eq!(area.asset_count, 3);
    assert_eq!(area.name_collisions.len(), 1);
    assert!(!area.will_skip());

    assert!(!ws.output().exists());
    assert!(builder.calls.borrow().is_empty());
}

#[test]
fn plan_fails_on_unreadable_input_root() {
    let dir = tempdir().unwrap();
    let builder = FakeArchiveBuilder::new();
    let options = PackageOptions::new(dir.path().join("missing"), dir.path().join("output"));

    let result = use_case(&builder).plan(&options);

    assert!(matches!(
        result,
        Err(crate::error::MapDlcError::InputRootUnreadable { .. })
    ));
}

#[cfg(unix)]
#[test]
fn unreadable_subfolder_is_reported_and_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let ws = Workspace::new();
    ws.asset("Test Area", "ok.ymap");
    ws.asset("Test Area", "locked/hidden.ymap");
    let locked = ws.input().join("Test Area/locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // root ignores permission bits; nothing to observe then
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let builder = FakeArchiveBuilder::new();
    let sink = RecordingEventSink::new();
    let report = use_case(&builder).execute(&ws.options(), &sink);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(matches!(
        report.projects[0].outcome,
        ProjectOutcome::Packaged { .. }
    ));
    assert_eq!(builder.call("testarea").contents, vec!["ok.ymap"]);
    assert!(sink.events().iter().any(|e| matches!(
        e,
        PackageEvent::ScanSkipped { unexpected: false, .. }
    )));
}

#[cfg(unix)]
#[test]
fn uninspectable_root_entry_is_reported() {
    use std::os::unix::fs::PermissionsExt;

    let ws = Workspace::new();
    ws.asset("Test Area", "test.ymap");
    fs::set_permissions(ws.input(), fs::Permissions::from_mode(0o644)).unwrap();

    if fs::metadata(ws.input().join("Test Area")).is_ok() {
        fs::set_permissions(ws.input(), fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let builder = FakeArchiveBuilder::new();
    let sink = RecordingEventSink::new();
    let report = use_case(&builder).execute(&ws.options(), &sink);
    let plan = use_case(&builder).plan(&ws.options()).unwrap();
    fs::set_permissions(ws.input(), fs::Permissions::from_mode(0o755)).unwrap();

    assert!(report.fatal.is_none());
    assert!(report.projects.is_empty());
    assert!(sink.events().iter().any(|e| matches!(
        e,
        PackageEvent::EntrySkipped { path, .. } if path.ends_with("Test Area")
    )));
    assert_eq!(plan.skipped_entries.len(), 1);
}

//! JSON Event Sink
//!
//! Outputs package events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PackageEvent, PackageEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Convert an event to its NDJSON object
pub fn event_to_json(event: &PackageEvent) -> serde_json::Value {
    match event {
        PackageEvent::RunStarted {
            input,
            output,
            project_count,
        } => serde_json::json!({
            "event": "start",
            "command": "build",
            "input": input.display().to_string(),
            "output": output.display().to_string(),
            "project_count": project_count,
        }),

        PackageEvent::RunFatal { path, error } => serde_json::json!({
            "event": "fatal",
            "command": "build",
            "path": path.display().to_string(),
            "error": error,
        }),

        PackageEvent::EntrySkipped { path, reason } => serde_json::json!({
            "event": "entry_skipped",
            "path": path.display().to_string(),
            "reason": reason,
        }),

        PackageEvent::ProjectStarted {
            index,
            project,
            package,
        } => serde_json::json!({
            "event": "project_start",
            "index": index,
            "project": project,
            "package": package,
        }),

        PackageEvent::StepEntered { project, state } => serde_json::json!({
            "event": "step",
            "project": project,
            "state": state.as_str(),
        }),

        PackageEvent::ScanSkipped {
            project,
            path,
            reason,
            unexpected,
        } => serde_json::json!({
            "event": "scan_skipped",
            "project": project,
            "path": path.display().to_string(),
            "reason": reason,
            "unexpected": unexpected,
        }),

        PackageEvent::AssetsFound { project, count } => serde_json::json!({
            "event": "assets_found",
            "project": project,
            "count": count,
        }),

        PackageEvent::AssetNameCollision { project, path } => serde_json::json!({
            "event": "asset_name_collision",
            "project": project,
            "path": path.display().to_string(),
        }),

        PackageEvent::AssetCopyFailed {
            project,
            path,
            error,
        } => serde_json::json!({
            "event": "asset_copy_failed",
            "project": project,
            "path": path.display().to_string(),
            "error": error,
        }),

        PackageEvent::ArchiveBuildFailed {
            project,
            archive,
            diagnostic,
        } => serde_json::json!({
            "event": "archive_failed",
            "project": project,
            "archive": archive,
            "diagnostic": diagnostic,
        }),

        PackageEvent::CleanupFailed { path, error } => serde_json::json!({
            "event": "cleanup_failed",
            "path": path.display().to_string(),
            "error": error,
        }),

        PackageEvent::ProjectSkipped { project, reason } => serde_json::json!({
            "event": "project_skipped",
            "project": project,
            "reason": reason,
        }),

        PackageEvent::ProjectFailed {
            project,
            step,
            error,
        } => serde_json::json!({
            "event": "project_failed",
            "project": project,
            "step": step.as_str(),
            "error": error,
        }),

        PackageEvent::ProjectPackaged {
            project,
            artifact,
            partial,
        } => serde_json::json!({
            "event": "project_packaged",
            "project": project,
            "artifact": artifact.display().to_string(),
            "status": if *partial { "partial" } else { "success" },
        }),

        PackageEvent::RunCompleted {
            packaged,
            partial,
            skipped,
            failed,
        } => {
            let status = if *failed == 0 && *partial == 0 {
                "success"
            } else {
                "partial"
            };
            serde_json::json!({
                "event": "complete",
                "command": "build",
                "status": status,
                "packaged": packaged,
                "partial": partial,
                "skipped": skipped,
                "failed": failed,
            })
        }
    }
}

impl PackageEventSink for JsonEventSink {
    fn on_event(&self, event: PackageEvent) {
        self.write_event(event_to_json(&event));
    }

    fn wants_detailed_events(&self) -> bool {
        true
    }
}

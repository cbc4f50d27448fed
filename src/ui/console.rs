//! Console Event Sink
//!
//! Human-readable rendering of package events. Progress goes to stdout;
//! warnings and failures go to stderr.

use mapdlc::domain::ports::{PackageEvent, PackageEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

pub struct ConsoleEventSink {
    ui: UiContext,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }

    /// Text for one event, or `None` when the event prints nothing
    pub fn render(&self, event: &PackageEvent) -> Option<(Stream, String)> {
        let color = self.ui.color;
        let unicode = self.ui.unicode;
        let icon = |i: Icon| i.colored(color, unicode);

        let line = match event {
            PackageEvent::RunStarted { project_count, .. } => (
                Stream::Stdout,
                format!("{} Found {} project folder(s)", icon(Icon::Progress), project_count),
            ),
            PackageEvent::RunFatal { error, .. } => {
                (Stream::Stderr, format!("{} {}", icon(Icon::Error), error))
            }
            PackageEvent::EntrySkipped { path, reason } => (
                Stream::Stderr,
                format!(
                    "{} skipped unreadable entry {} ({})",
                    icon(Icon::Warning),
                    path.display(),
                    reason
                ),
            ),
            PackageEvent::ProjectStarted {
                index,
                project,
                package,
            } => (
                Stream::Stdout,
                format!(
                    "\n{} [{}] {} {} {}",
                    icon(Icon::Progress),
                    index + 1,
                    ColoredText::info(project.as_str()).bold().render(color),
                    ColoredText::dim(if unicode { "→" } else { "->" }).render(color),
                    package
                ),
            ),
            PackageEvent::StepEntered { state, .. } => (
                Stream::Stdout,
                format!(
                    "  {} {}",
                    icon(Icon::Arrow),
                    ColoredText::dim(state.as_str()).render(color)
                ),
            ),
            PackageEvent::ScanSkipped { path, reason, .. } => (
                Stream::Stderr,
                format!(
                    "  {} skipped unreadable folder {} ({})",
                    icon(Icon::Warning),
                    path.display(),
                    reason
                ),
            ),
            PackageEvent::AssetsFound { count, .. } => (
                Stream::Stdout,
                format!("  {} {} asset file(s)", icon(Icon::Arrow), count),
            ),
            PackageEvent::AssetNameCollision { path, .. } => (
                Stream::Stderr,
                format!(
                    "  {} {} not staged: another asset has the same file name",
                    icon(Icon::Warning),
                    path.display()
                ),
            ),
            PackageEvent::AssetCopyFailed { path, error, .. } => (
                Stream::Stderr,
                format!(
                    "  {} could not stage {}: {}",
                    icon(Icon::Warning),
                    path.display(),
                    error
                ),
            ),
            PackageEvent::ArchiveBuildFailed {
                archive,
                diagnostic,
                ..
            } => {
                let mut text = format!("  {} archive {} failed", icon(Icon::Error), archive);
                let diagnostic = diagnostic.trim();
                if !diagnostic.is_empty() {
                    for line in diagnostic.lines() {
                        text.push_str(&format!(
                            "\n      {}",
                            ColoredText::dim(line).render(color)
                        ));
                    }
                }
                (Stream::Stderr, text)
            }
            PackageEvent::CleanupFailed { path, error } => (
                Stream::Stderr,
                format!(
                    "  {} could not remove {}: {}",
                    icon(Icon::Warning),
                    path.display(),
                    error
                ),
            ),
            PackageEvent::ProjectSkipped { reason, .. } => (
                Stream::Stdout,
                format!("  {} skipped: {}", icon(Icon::Skipped), reason),
            ),
            PackageEvent::ProjectFailed { step, error, .. } => (
                Stream::Stderr,
                format!(
                    "  {} failed at {}: {}",
                    icon(Icon::Error),
                    step,
                    ColoredText::error(error.as_str()).render(color)
                ),
            ),
            PackageEvent::ProjectPackaged {
                artifact, partial, ..
            } => {
                if *partial {
                    (
                        Stream::Stdout,
                        format!(
                            "  {} {} {}",
                            icon(Icon::Warning),
                            artifact.display(),
                            ColoredText::warning("(partial)").render(color)
                        ),
                    )
                } else {
                    (
                        Stream::Stdout,
                        format!("  {} {}", icon(Icon::Success), artifact.display()),
                    )
                }
            }
            PackageEvent::RunCompleted { .. } => return None,
        };

        Some(line)
    }
}

impl PackageEventSink for ConsoleEventSink {
    fn on_event(&self, event: PackageEvent) {
        match self.render(&event) {
            Some((Stream::Stdout, text)) => println!("{}", text),
            Some((Stream::Stderr, text)) => eprintln!("{}", text),
            None => {}
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.ui.verbose > 0
    }
}

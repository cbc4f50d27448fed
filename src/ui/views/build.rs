use std::path::Path;

use mapdlc::application::{ProjectOutcome, RunReport};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_build_header(
    input: &Path,
    output: &Path,
    tool: &Path,
    config_source: Option<&Path>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "mapdlc build");
    header.add_path("Input", input);
    header.add_path("Output", output);
    header.add_path("Tool", tool);
    if let Some(source) = config_source {
        header.add_path("Config", source);
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_build_summary(
    report: &RunReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    // the fatal error itself was already printed by the event sink
    if report.fatal.is_some() {
        let mut summary = ResultSummary::failure("Build Aborted");
        summary.with_next_step("Check the input directory path (--input or paths.input)");
        return summary.render(supports_color, supports_unicode);
    }

    let mut summary = if report.is_clean() {
        ResultSummary::success("Build Complete")
    } else {
        ResultSummary::partial("Build Finished With Problems")
    };

    summary.add_stat("packaged", report.packaged_count());
    summary.add_stat("partial", report.partial_count());
    summary.add_stat("skipped", report.skipped_count());
    summary.add_stat("failed", report.failed_count());

    let arrow = if supports_unicode { "→" } else { "->" };
    for project in &report.projects {
        match &project.outcome {
            ProjectOutcome::Packaged { artifact } => {
                summary.add_info(format!(
                    "{} {} {}",
                    project.project,
                    arrow,
                    artifact.archive.display()
                ));
            }
            ProjectOutcome::Partial { failures, .. } => {
                for failure in failures {
                    summary.add_warning(format!("{}: {}", project.project, failure));
                }
            }
            ProjectOutcome::Failed { step, error } => {
                summary.add_warning(format!("{} failed at {}: {}", project.project, step, error));
            }
            ProjectOutcome::SkippedUnreadable { error } => {
                summary.add_warning(format!("{} unreadable: {}", project.project, error));
            }
            ProjectOutcome::SkippedEmpty => {}
        }
    }

    for name in &report.unmatched {
        summary.add_warning(format!("no project folder named '{}'", name));
    }

    if report.failed_count() > 0 || report.partial_count() > 0 {
        summary.with_next_step("Re-run with -v to see every pipeline step");
    }

    summary.render(supports_color, supports_unicode)
}

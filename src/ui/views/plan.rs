use std::path::Path;

use mapdlc::application::PlanReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_plan_header(
    input: &Path,
    output: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Plan, "mapdlc plan");
    header.add_path("Input", input);
    header.add_path("Output", output);
    header.render(supports_color, supports_unicode)
}

pub fn render_plan(
    plan: &PlanReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();

    for project in &plan.projects {
        let (icon, status) = if project.will_skip() {
            (Icon::Skipped, ColoredText::dim("skip (no assets)"))
        } else {
            (Icon::Success, ColoredText::success(format!("{} asset(s)", project.asset_count)))
        };

        out.push_str(&format!(
            "{} {} {} {}  {}\n",
            icon.colored(supports_color, supports_unicode),
            project.project,
            if supports_unicode { "→" } else { "->" },
            project.names.package_name_lower(),
            status.render(supports_color)
        ));

        if verbose > 0 {
            out.push_str(&format!(
                "    {} {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                project.package_dir.display()
            ));
        }
        for path in &project.name_collisions {
            out.push_str(&format!(
                "    {} duplicate file name, not staged: {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                path.display()
            ));
        }
        for skipped in &project.skipped {
            out.push_str(&format!(
                "    {} unreadable: {} ({})\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                skipped.path.display(),
                skipped.reason
            ));
        }
    }

    let mut summary = ResultSummary::success("Plan");
    let packages = plan.projects.iter().filter(|p| !p.will_skip()).count();
    summary.add_stat("package(s) would be built", packages);
    summary.add_stat("project(s) would be skipped", plan.projects.len() - packages);
    if packages > 0 {
        summary.with_next_step("Run `mapdlc build` to create the packages");
    }

    out.push('\n');
    if !plan.skipped_entries.is_empty() {
        let mut unreadable = WarningBlock::new("Unreadable entries");
        for skipped in &plan.skipped_entries {
            unreadable.add_line(format!("{} ({})", skipped.path.display(), skipped.reason));
        }
        out.push_str(&unreadable.render(supports_color, supports_unicode));
        out.push('\n');
    }
    if !plan.unmatched.is_empty() {
        let mut unknown = WarningBlock::new("Unknown projects");
        for name in &plan.unmatched {
            unknown.add_line(format!("no project folder named '{}'", name));
        }
        out.push_str(&unknown.render(supports_color, supports_unicode));
        out.push('\n');
    }
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}

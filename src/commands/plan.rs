use std::path::Path;

use anyhow::Result;
use mapdlc::application::PackageOptions;
use mapdlc::presentation::{create_package_use_case, ColorWhen, RunArgs};

use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::plan::{render_plan, render_plan_header};

/// Dry run. Like `build`, an unreadable input root is reported, not raised.
pub fn cmd_plan(
    config_path: Option<&Path>,
    run: &RunArgs,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let loaded = super::load_config(config_path, run)?;
    let config = &loaded.config;
    let ui = UiContext::new(json, verbose, color, config);
    print_config_warnings(&loaded.warnings, &ui);

    let use_case = create_package_use_case(config)?;
    let options =
        PackageOptions::from_config(config).with_projects(run.projects.iter().cloned());

    let plan = match use_case.plan(&options) {
        Ok(plan) => plan,
        Err(e) => {
            if json {
                let _ = crate::ui::json::emit(serde_json::json!({
                    "event": "fatal",
                    "command": "plan",
                    "path": options.input_root.display().to_string(),
                    "error": e.to_string(),
                }));
            } else {
                eprintln!("{} {}", Icon::Error.colored(ui.color, ui.unicode), e);
            }
            return Ok(());
        }
    };

    if json {
        let mut out = std::io::stdout().lock();
        for skipped in &plan.skipped_entries {
            let _ = crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "warning",
                    "command": "plan",
                    "path": skipped.path.display().to_string(),
                    "message": format!("entry skipped: {}", skipped.reason),
                }),
            );
        }
        for project in &plan.projects {
            let _ = crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "plan",
                    "command": "plan",
                    "project": project.project,
                    "package": project.names.package_name_lower(),
                    "package_dir": project.package_dir.display().to_string(),
                    "assets": project.asset_count,
                    "skip": project.will_skip(),
                    "name_collisions": project.name_collisions.len(),
                    "unreadable": project.skipped.len(),
                }),
            );
        }
        let _ = crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "plan",
                "projects": plan.projects.len(),
                "unmatched": plan.unmatched,
            }),
        );
        return Ok(());
    }

    print!(
        "{}",
        render_plan_header(&options.input_root, &options.output_root, ui.color, ui.unicode)
    );
    println!();
    print!("{}", render_plan(&plan, verbose, ui.color, ui.unicode));
    Ok(())
}

use std::path::Path;

use anyhow::Result;
use mapdlc::application::PackageOptions;
use mapdlc::infrastructure::JsonEventSink;
use mapdlc::presentation::{create_package_use_case, ColorWhen, RunArgs};

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::build::{render_build_header, render_build_summary};

/// Package every project. Project failures never change the exit status.
pub fn cmd_build(
    config_path: Option<&Path>,
    run: &RunArgs,
    keep_staging: bool,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let loaded = super::load_config(config_path, run)?;
    let config = &loaded.config;
    let ui = UiContext::new(json, verbose, color, config);
    print_config_warnings(&loaded.warnings, &ui);

    let use_case = create_package_use_case(config)?;
    let options = PackageOptions::from_config(config)
        .with_projects(run.projects.iter().cloned())
        .with_keep_staging(keep_staging);

    if json {
        let report = use_case.execute(&options, &JsonEventSink::stdout());
        for name in &report.unmatched {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "command": "build",
                "message": format!("no project folder named '{}'", name),
            }));
        }
        return Ok(());
    }

    print!(
        "{}",
        render_build_header(
            &config.paths.input,
            &config.paths.output,
            &config.archive.tool,
            loaded.source.as_deref(),
            ui.color,
            ui.unicode,
        )
    );

    let report = use_case.execute(&options, &ConsoleEventSink::new(ui));

    println!();
    print!("{}", render_build_summary(&report, ui.color, ui.unicode));
    Ok(())
}

use std::path::Path;

use anyhow::Result;
use mapdlc::config::LoadedConfig;
use mapdlc::domain::ports::ArchiveBuilder;
use mapdlc::infrastructure::ProjectDiscovery;
use mapdlc::presentation::{create_archive_builder, ColorWhen, RunArgs};

use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::check::{count, render_check_header, render_check_report};

/// Validate config, templates, paths and the archive tool.
///
/// Exits with status 1 when any check is an error.
pub fn cmd_check(
    config_path: Option<&Path>,
    run: &RunArgs,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let loaded = super::load_config(config_path, run)?;
    let ui = UiContext::new(json, verbose, color, &loaded.config);
    print_config_warnings(&loaded.warnings, &ui);

    let items = run_checks(&loaded);
    let errors = count(&items, CheckStatus::Error);

    if json {
        let mut out = std::io::stdout().lock();
        for item in &items {
            let status = match item.status {
                CheckStatus::Pass => "pass",
                CheckStatus::Warning => "warning",
                CheckStatus::Error => "error",
            };
            let _ = crate::ui::json::write_event(
                &mut out,
                &serde_json::json!({
                    "event": "check",
                    "command": "check",
                    "name": item.name,
                    "status": status,
                    "message": item.message,
                    "recommendation": item.recommendation,
                    "details": item.details,
                }),
            );
        }
        let _ = crate::ui::json::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "check",
                "passes": count(&items, CheckStatus::Pass),
                "warnings": count(&items, CheckStatus::Warning),
                "errors": errors,
                "success": errors == 0,
            }),
        );
    } else {
        print!(
            "{}",
            render_check_header(loaded.source.as_deref(), ui.color, ui.unicode)
        );
        println!();
        print!(
            "{}",
            render_check_report(&items, verbose, ui.color, ui.unicode)
        );
    }

    if errors > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn run_checks(loaded: &LoadedConfig) -> Vec<CheckItem> {
    vec![
        check_config(loaded),
        check_templates(loaded),
        check_input(loaded),
        check_output(loaded),
        check_tool(loaded),
    ]
}

fn check_config(loaded: &LoadedConfig) -> CheckItem {
    let message = match &loaded.source {
        Some(path) => format!("loaded {}", path.display()),
        None => "no config file, using defaults".to_string(),
    };

    if loaded.warnings.is_empty() {
        return item("config", CheckStatus::Pass, message);
    }

    let mut check = item(
        "config",
        CheckStatus::Warning,
        format!("{} ({} unknown key(s))", message, loaded.warnings.len()),
    );
    check.details = loaded
        .warnings
        .iter()
        .map(|w| match &w.suggestion {
            Some(s) => format!("{} (did you mean '{}'?)", w.key, s),
            None => w.key.clone(),
        })
        .collect();
    check
}

fn check_templates(loaded: &LoadedConfig) -> CheckItem {
    let manifest = &loaded.config.manifest;
    let custom = manifest.content_template.is_some() || manifest.setup_template.is_some();

    match loaded.config.manifest_engine() {
        Ok(_) if custom => item("templates", CheckStatus::Pass, "custom templates compile"),
        Ok(_) => item("templates", CheckStatus::Pass, "built-in templates"),
        Err(e) => {
            let mut check = item("templates", CheckStatus::Error, e.to_string());
            check.recommendation =
                Some("Use only declared {{PLACEHOLDER}} names in custom templates".to_string());
            check
        }
    }
}

fn check_input(loaded: &LoadedConfig) -> CheckItem {
    let config = &loaded.config;
    let discovery =
        ProjectDiscovery::new(&config.paths.input).excluding(&config.paths.output);

    match discovery.list_projects() {
        Ok(listing) => {
            let status = if listing.skipped.is_empty() {
                CheckStatus::Pass
            } else {
                CheckStatus::Warning
            };
            let mut check = item(
                "input",
                status,
                format!(
                    "{} project folder(s) in {}",
                    listing.projects.len(),
                    config.paths.input.display()
                ),
            );
            check.details = listing
                .projects
                .iter()
                .map(|p| p.folder_name().to_string())
                .chain(listing.skipped.iter().map(|s| {
                    format!("unreadable: {} ({})", s.path.display(), s.reason)
                }))
                .collect();
            if !listing.skipped.is_empty() {
                check.recommendation =
                    Some("Fix permissions on the unreadable entries".to_string());
            }
            check
        }
        Err(e) => {
            let mut check = item("input", CheckStatus::Warning, e.to_string());
            check.recommendation =
                Some("Create the folder or point paths.input / --input at it".to_string());
            check
        }
    }
}

fn check_output(loaded: &LoadedConfig) -> CheckItem {
    let output = &loaded.config.paths.output;
    if output.is_dir() {
        item(
            "output",
            CheckStatus::Pass,
            format!("{} exists", output.display()),
        )
    } else if output.exists() {
        item(
            "output",
            CheckStatus::Error,
            format!("{} exists but is not a directory", output.display()),
        )
    } else {
        item(
            "output",
            CheckStatus::Pass,
            format!("{} will be created", output.display()),
        )
    }
}

fn check_tool(loaded: &LoadedConfig) -> CheckItem {
    let builder = create_archive_builder(&loaded.config);
    if builder.is_available() {
        return item(
            "archive tool",
            CheckStatus::Pass,
            format!("{} is available", builder.tool().display()),
        );
    }

    let mut check = item(
        "archive tool",
        CheckStatus::Error,
        format!("{} could not be run", builder.tool().display()),
    );
    check.recommendation = Some("Set archive.tool in mapdlc.toml or pass --tool".to_string());
    check
}

fn item(name: &str, status: CheckStatus, message: impl Into<String>) -> CheckItem {
    CheckItem {
        name: name.to_string(),
        status,
        message: message.into(),
        recommendation: None,
        details: Vec::new(),
    }
}

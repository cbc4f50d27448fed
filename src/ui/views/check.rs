use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_check_header(
    config_source: Option<&std::path::Path>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "mapdlc check");
    match config_source {
        Some(path) => header.add_path("Config", path),
        None => header.add("Config", "built-in defaults"),
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_check_report(
    items: &[CheckItem],
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(&item.render(verbose > 0, supports_color, supports_unicode));
    }

    let errors = count(items, CheckStatus::Error);
    let warnings = count(items, CheckStatus::Warning);
    let mut summary = if errors > 0 {
        ResultSummary::failure("Check Failed")
    } else if warnings > 0 {
        ResultSummary::partial("Check Passed With Warnings")
    } else {
        ResultSummary::success("Check Passed")
    };
    summary.add_stat("passed", count(items, CheckStatus::Pass));
    summary.add_stat("warnings", warnings);
    summary.add_stat("errors", errors);
    if errors == 0 {
        summary.with_next_step("Run `mapdlc build`");
    }

    out.push('\n');
    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}

pub fn count(items: &[CheckItem], status: CheckStatus) -> usize {
    items.iter().filter(|i| i.status == status).count()
}

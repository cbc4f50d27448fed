use mapdlc::MapDlcError;

use crate::ui::primitives::icon::Icon;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let Some(mapdlc_err) = err.downcast_ref::<MapDlcError>() else {
        return format!(
            "{} {:#}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            err
        );
    };

    let header = format!(
        "{} {}",
        Icon::Error.colored(supports_color, supports_unicode),
        mapdlc_err
    );
    let mut b = Box::with_title(header).style(BoxStyle::Error);
    if let Some(fix) = fix_hint(mapdlc_err) {
        b.add_empty();
        b.add_line(format!(
            "{} {}",
            Icon::Arrow.colored(supports_color, supports_unicode),
            fix
        ));
    }
    b.render(supports_color, supports_unicode)
}

fn fix_hint(err: &MapDlcError) -> Option<&'static str> {
    match err {
        MapDlcError::InvalidConfig { .. } => Some("Fix the TOML syntax or pass --config with another file."),
        MapDlcError::InvalidTemplate { .. } => Some(
            "Templates may only use the placeholders listed in the docs, written as {{NAME}}.",
        ),
        _ => None,
    }
}

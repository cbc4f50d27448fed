use mapdlc::config::ConfigWarning;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json {
        for w in warnings {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "config_warning",
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
        }
        return;
    }

    for w in warnings {
        eprint!("{}", render_config_warning(w, ui.color, ui.unicode));
    }
}

pub(crate) fn render_config_warning(
    warning: &ConfigWarning,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let icon = Icon::Warning.colored(supports_color, supports_unicode);
    let mut out = match warning.line {
        Some(line) => format!(
            "{} Unknown config key '{}' in {}:{}\n",
            icon,
            warning.key,
            warning.file.display(),
            line
        ),
        None => format!(
            "{} Unknown config key '{}' in {}\n",
            icon,
            warning.key,
            warning.file.display()
        ),
    };

    if let Some(suggestion) = &warning.suggestion {
        out.push_str(&format!(
            "   {}\n",
            ColoredText::dim(format!("Did you mean '{}'?", suggestion)).render(supports_color)
        ));
    }
    out
}

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Partial,
    Failure,
}

#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    tone: Tone,
    stats: Vec<(String, usize)>,
    infos: Vec<String>,
    warnings: Vec<String>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self::with_tone(title, Tone::Success)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::with_tone(title, Tone::Partial)
    }

    pub fn failure(title: impl Into<String>) -> Self {
        Self::with_tone(title, Tone::Failure)
    }

    fn with_tone(title: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: title.into(),
            tone,
            stats: Vec::new(),
            infos: Vec::new(),
            warnings: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// Shown with the success icon
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let icon = |i: Icon| i.colored(supports_color, supports_unicode);
        let (style, title_icon, title) = match self.tone {
            Tone::Success => (BoxStyle::Success, Icon::Success, ColoredText::success(&self.title)),
            Tone::Partial => (BoxStyle::Warning, Icon::Warning, ColoredText::warning(&self.title)),
            Tone::Failure => (BoxStyle::Error, Icon::Error, ColoredText::error(&self.title)),
        };

        let mut b = Box::with_title(format!(
            "{} {}",
            icon(title_icon),
            title.bold().render(supports_color)
        ))
        .style(style);
        b.add_empty();
        for (label, count) in &self.stats {
            b.add_line(format!("{} {}", count, label));
        }

        for (marker, lines) in [(Icon::Success, &self.infos), (Icon::Warning, &self.warnings)] {
            if lines.is_empty() {
                continue;
            }
            b.add_empty();
            for line in lines {
                b.add_line(format!("{} {}", icon(marker), line));
            }
        }

        if let Some(next_step) = &self.next_step {
            b.add_empty();
            b.add_line(format!(
                "{} {} {}",
                icon(Icon::Arrow),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_success_icon_in_title() {
        let mut summary = ResultSummary::success("Build Complete");
        summary.add_stat("packaged", 2);

        let rendered = summary.render(false, false);
        assert!(rendered.contains("[OK] Build Complete"));
        assert!(rendered.contains("2 packaged"));
    }

    #[test]
    fn failure_uses_error_icon_and_lists_warnings() {
        let mut summary = ResultSummary::failure("Build Failed");
        summary.add_warning("cannot read input directory mappings");

        let rendered = summary.render(false, false);
        assert!(rendered.contains("[FAIL] Build Failed"));
        assert!(rendered.contains("[WARN] cannot read input directory mappings"));
    }
}

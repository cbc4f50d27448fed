//! Command header: the title line, then the paths and sources a command
//! is about to use, with labels aligned in one column.

use std::path::Path;

use unicode_width::UnicodeWidthStr;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct CommandHeader {
    icon: Icon,
    title: String,
    fields: Vec<(String, String)>,
}

impl CommandHeader {
    pub fn new(icon: Icon, title: impl Into<String>) -> Self {
        Self {
            icon,
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn add(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.fields.push((label.into(), value.into()));
    }

    pub fn add_path(&mut self, label: impl Into<String>, path: &Path) {
        self.add(label, path.display().to_string());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {}\n",
            self.icon.colored(supports_color, supports_unicode),
            ColoredText::info(self.title.as_str())
                .bold()
                .render(supports_color)
        );

        let width = self
            .fields
            .iter()
            .map(|(label, _)| label.width() + 1)
            .max()
            .unwrap_or(0);
        for (label, value) in &self.fields {
            let label = format!("{}:", label);
            let pad = " ".repeat(width - label.width());
            out.push_str(&format!(
                "  {}{} {}\n",
                ColoredText::dim(label).render(supports_color),
                pad,
                value
            ));
        }
        out
    }
}

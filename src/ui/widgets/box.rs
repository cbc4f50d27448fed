//! Bordered panel used by summaries, warnings and error reports.

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxStyle {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl BoxStyle {
    fn color(self) -> crossterm::style::Color {
        match self {
            BoxStyle::Info => theme::colors::INFO,
            BoxStyle::Success => theme::colors::SUCCESS,
            BoxStyle::Warning => theme::colors::WARNING,
            BoxStyle::Error => theme::colors::ERROR,
        }
    }
}

/// Rows of text framed by a border sized to the widest row
#[derive(Debug, Default, Clone)]
pub struct Box {
    rows: Vec<String>,
    style: BoxStyle,
}

impl Box {
    pub fn with_title(title: impl Into<String>) -> Self {
        let mut b = Self::default();
        b.add_line(title);
        b
    }

    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Embedded newlines start new rows
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.rows.extend(line.into().lines().map(str::to_string));
    }

    pub fn add_empty(&mut self) {
        self.rows.push(String::new());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let border = theme::borders(supports_unicode);
        let paint = |s: &str| {
            if supports_color {
                s.with(self.style.color()).to_string()
            } else {
                s.to_string()
            }
        };

        let content_width = self.rows.iter().map(|r| visible_width(r)).max().unwrap_or(0);
        let rule = border.horizontal.repeat(content_width + 2);
        let side = paint(border.vertical);

        let mut out = paint(&format!("{}{}{}", border.top_left, rule, border.top_right));
        out.push('\n');
        for row in &self.rows {
            let pad = content_width - visible_width(row);
            out.push_str(&format!("{} {}{} {}\n", side, row, " ".repeat(pad), side));
        }
        out.push_str(&paint(&format!(
            "{}{}{}",
            border.bottom_left, rule, border.bottom_right
        )));
        out.push('\n');
        out
    }
}

/// Display width with CSI/OSC escape sequences removed
fn visible_width(s: &str) -> usize {
    if !s.contains('\u{1b}') {
        return s.width();
    }

    let mut plain = String::with_capacity(s.len());
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\u{1b}') => in_escape = true,
            (false, _) => plain.push(c),
            (true, c) if c.is_ascii_alphabetic() => in_escape = false,
            (true, _) => {}
        }
    }
    plain.width()
}

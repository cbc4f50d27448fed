use crossterm::style::{Color, Stylize};

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Skipped,
    Arrow,
    Build,
    Plan,
    Check,
}

impl Icon {
    /// Unicode glyph, ASCII fallback and color for this icon
    fn glyphs(self) -> (&'static str, &'static str, Color) {
        use crate::ui::theme::{colors, icons, icons_ascii};
        match self {
            Icon::Success => (icons::SUCCESS, icons_ascii::SUCCESS, colors::SUCCESS),
            Icon::Error => (icons::ERROR, icons_ascii::ERROR, colors::ERROR),
            Icon::Warning => (icons::WARNING, icons_ascii::WARNING, colors::WARNING),
            Icon::Progress => (icons::PROGRESS, icons_ascii::PROGRESS, colors::WARNING),
            Icon::Skipped => (icons::SKIPPED, icons_ascii::SKIPPED, colors::DIM),
            Icon::Arrow => (icons::ARROW, icons_ascii::ARROW, colors::DIM),
            Icon::Build => (icons::BUILD, icons_ascii::BUILD, colors::INFO),
            Icon::Plan => (icons::PLAN, icons_ascii::PLAN, colors::INFO),
            Icon::Check => (icons::CHECK, icons_ascii::CHECK, colors::INFO),
        }
    }

    pub fn render(&self, supports_unicode: bool) -> &'static str {
        let (unicode, ascii, _) = self.glyphs();
        if supports_unicode {
            unicode
        } else {
            ascii
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let glyph = self.render(supports_unicode);
        if supports_color {
            glyph.with(self.glyphs().2).to_string()
        } else {
            glyph.to_string()
        }
    }
}

use crate::ui::primitives::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CheckItem {
    pub name: String,
    pub status: CheckStatus,
    pub message: String,
    pub recommendation: Option<String>,
    pub details: Vec<String>,
}

impl CheckItem {
    /// One status line, then the recommendation and (when verbose) details
    /// as indented follow-up lines
    pub fn render(&self, verbose: bool, supports_color: bool, supports_unicode: bool) -> String {
        let status = match self.status {
            CheckStatus::Pass => Icon::Success,
            CheckStatus::Warning => Icon::Warning,
            CheckStatus::Error => Icon::Error,
        };
        let arrow = Icon::Arrow.colored(supports_color, supports_unicode);

        let mut out = format!(
            "  {} {} - {}\n",
            status.colored(supports_color, supports_unicode),
            self.name,
            self.message
        );

        let details: &[String] = if verbose { &self.details } else { &[] };
        for line in self.recommendation.iter().chain(details) {
            out.push_str(&format!("    {} {}\n", arrow, line));
        }
        out
    }
}

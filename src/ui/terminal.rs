//! Terminal capability detection.
//!
//! Decided once per process from the environment and whether stdout is a TTY.

use is_terminal::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_ci: bool,
}

const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "JENKINS_HOME",
    "BUILDKITE",
    "CIRCLECI",
    "TEAMCITY_VERSION",
];

const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];

pub fn detect_capabilities() -> TerminalCapabilities {
    capabilities_from(
        |key| std::env::var(key).ok(),
        std::io::stdout().is_terminal(),
    )
}

fn capabilities_from(env: impl Fn(&str) -> Option<String>, is_tty: bool) -> TerminalCapabilities {
    let dumb = env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));

    TerminalCapabilities {
        is_tty,
        supports_color: is_tty && !dumb && env("NO_COLOR").is_none(),
        supports_unicode: !dumb && locale_allows_unicode(&env),
        is_ci: CI_VARS.iter().any(|k| env(k).is_some()),
    }
}

/// The first locale variable that is set decides; unset means yes.
fn locale_allows_unicode(env: &impl Fn(&str) -> Option<String>) -> bool {
    match LOCALE_VARS.iter().find_map(|k| env(k)) {
        Some(locale) => !matches!(locale.to_ascii_lowercase().as_str(), "c" | "posix"),
        None => true,
    }
}

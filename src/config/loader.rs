//! Configuration loading
//!
//! Lookup order, highest priority first:
//! 1. CLI flags (applied by the binary after loading)
//! 2. Environment variables (MAPDLC_*)
//! 3. Explicit `--config` file
//! 4. `mapdlc.toml` in the working directory
//! 5. User config (`<config dir>/mapdlc/config.toml`)
//! 6. Built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{MapDlcError, MapDlcResult};

use super::types::{Config, LoadedConfig};

/// Config file name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "mapdlc.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MapDlcResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MapDlcError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the effective configuration.
///
/// An explicit path must exist. Implicit files are used when present; a
/// present but malformed file is still an error.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> MapDlcResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => implicit_candidates(cwd).into_iter().find(|p| p.is_file()),
    };

    let loaded = match candidate {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path).map_err(|e| match e {
                MapDlcError::Io(io) => MapDlcError::InvalidConfig {
                    file: path.clone(),
                    message: io.to_string(),
                },
                other => other,
            })?;
            LoadedConfig {
                config,
                source: Some(path),
                warnings,
            }
        }
        None => LoadedConfig {
            config: Config::default(),
            source: None,
            warnings: Vec::new(),
        },
    };

    Ok(LoadedConfig {
        config: with_env_overrides(loaded.config),
        ..loaded
    })
}

fn implicit_candidates(cwd: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![cwd.join(PROJECT_CONFIG_FILE)];
    if let Some(user_dir) = user_config_dir() {
        candidates.push(user_dir.join("mapdlc").join("config.toml"));
    }
    candidates
}

fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

/// Apply environment variable overrides (MAPDLC_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env(config, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(input) = non_empty(get_env("MAPDLC_INPUT")) {
        config.paths.input = PathBuf::from(input);
    }

    if let Some(output) = non_empty(get_env("MAPDLC_OUTPUT")) {
        config.paths.output = PathBuf::from(output);
    }

    if let Some(tool) = non_empty(get_env("MAPDLC_TOOL")) {
        config.archive.tool = PathBuf::from(tool);
    }

    if let Some(hash) = non_empty(get_env("MAPDLC_LEVEL_HASH")) {
        config.manifest.level_hash = hash;
    }

    // MAPDLC_EXTENSIONS (comma-separated)
    if let Some(exts) = non_empty(get_env("MAPDLC_EXTENSIONS")) {
        let parsed: Vec<String> = exts
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !parsed.is_empty() {
            config.scan.extensions = parsed;
        }
    }

    config
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// First line that assigns `key` (or mentions it, for table headers)
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    let assigns = |line: &str| {
        line.trim_start()
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='))
    };
    content
        .lines()
        .position(assigns)
        .or_else(|| content.lines().position(|line| line.contains(key)))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "input",
        "output",
        "archive",
        "tool",
        "verb",
        "extension",
        "platform_folder",
        "outer_name",
        "scan",
        "extensions",
        "manifest",
        "level_hash",
        "content_template",
        "setup_template",
        "color",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, edit_distance(unknown, candidate)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(candidate, _)| candidate.to_string())
}

/// Levenshtein distance over bytes (config keys are ASCII)
fn edit_distance(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ac) in a.as_bytes().iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ac != bc);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[b.len()]
}

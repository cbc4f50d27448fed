//! Asset extension whitelist

use std::collections::BTreeSet;
use std::path::Path;

/// Extensions recognized as map assets when nothing else is configured
pub const DEFAULT_ASSET_EXTENSIONS: &[&str] = &["ymap", "ymf", "ytyp", "ydr", "ytd", "ybn"];

/// Case-insensitive set of file extensions that qualify as assets.
///
/// Entries are stored lowercase without a leading dot, so `".YDR"` and
/// `"ydr"` configure the same extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionWhitelist {
    extensions: BTreeSet<String>,
}

impl ExtensionWhitelist {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| normalize(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
        Self { extensions }
    }

    /// Whether `path` has a whitelisted extension (case-insensitive)
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.contains(&e.to_ascii_lowercase()))
            .unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

impl Default for ExtensionWhitelist {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_EXTENSIONS)
    }
}

fn normalize(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

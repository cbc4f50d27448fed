//! Derived package identifiers
//!
//! A mapping folder name like `"My Map!"` is turned into every identifier the
//! pipeline needs downstream: the slug used for the inner archive, the `dlc_`
//! package name used for the output directory and manifest device name, and
//! the level hash the content manifest binds the package to.
//!
//! Derivation is pure and total. Characters outside the restricted set are
//! removed, never replaced, so `"My Map!"` and `"MyMap"` collide. That
//! collision is accepted.

use serde::Serialize;

/// Prefix shared by every package name
pub const PACKAGE_PREFIX: &str = "dlc_";

/// Level hash used when the configuration does not override it
pub const DEFAULT_LEVEL_HASH: &str = "gta5";

/// Immutable bundle of identifiers derived from one project folder name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NameSet {
    slug_lower: String,
    slug_upper: String,
    package_name_lower: String,
    package_name_upper: String,
    level_hash: String,
}

impl NameSet {
    /// Lowercased slug, restricted to `[a-z0-9]`
    pub fn slug_lower(&self) -> &str {
        &self.slug_lower
    }

    /// Uppercased slug, restricted to `[A-Z0-9]`
    pub fn slug_upper(&self) -> &str {
        &self.slug_upper
    }

    /// `dlc_` + lowercase slug; names the output directory
    pub fn package_name_lower(&self) -> &str {
        &self.package_name_lower
    }

    /// `dlc_` + uppercase slug
    pub fn package_name_upper(&self) -> &str {
        &self.package_name_upper
    }

    pub fn level_hash(&self) -> &str {
        &self.level_hash
    }

    /// Replace the level hash. The slug-derived fields are never touched.
    pub fn with_level_hash(mut self, level_hash: impl Into<String>) -> Self {
        self.level_hash = level_hash.into();
        self
    }

    /// True when stripping left nothing usable (e.g. a folder named `"!!!"`)
    pub fn is_empty(&self) -> bool {
        self.slug_lower.is_empty()
    }
}

/// Derive every identifier for a project folder name.
pub fn derive_names(folder_name: &str) -> NameSet {
    let slug_lower: String = folder_name
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    let slug_upper: String = folder_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_uppercase();

    NameSet {
        package_name_lower: format!("{}{}", PACKAGE_PREFIX, slug_lower),
        package_name_upper: format!("{}{}", PACKAGE_PREFIX, slug_upper),
        slug_lower,
        slug_upper,
        level_hash: DEFAULT_LEVEL_HASH.to_string(),
    }
}

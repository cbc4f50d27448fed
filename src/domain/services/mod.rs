//! Domain Services
//!
//! Pure logic over domain values; no I/O.

pub mod manifest;
mod template;

pub use manifest::{format_timestamp, ManifestTemplateEngine, TIMESTAMP_FORMAT};
pub use template::{Template, TemplateError, TemplateValues};

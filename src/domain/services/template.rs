//! Structured placeholder templates
//!
//! Templates reference values as `{{NAME}}`. A template is compiled against
//! the list of placeholders it is allowed to use; referencing anything else
//! is a compile error. Rendering substitutes every placeholder that has a
//! value and copies the rest through exactly as written, so it never fails.

use std::collections::HashMap;

use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Template compilation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template references a placeholder that was not declared
    #[error("undeclared placeholder '{{{{{name}}}}}'")]
    Undeclared { name: String },

    /// A `{{` has no matching `}}`
    #[error("unterminated placeholder at byte {offset}")]
    Unterminated { offset: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `raw` is the token exactly as written, braces and spacing included
    Placeholder { name: String, raw: String },
}

/// A compiled template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source`, rejecting references to placeholders not in `declared`.
    pub fn compile(source: &str, declared: &[&str]) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut consumed = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }

            let after_open = &rest[start + OPEN.len()..];
            let end = after_open.find(CLOSE).ok_or(TemplateError::Unterminated {
                offset: consumed + start,
            })?;

            let name = after_open[..end].trim();
            if !declared.contains(&name) {
                return Err(TemplateError::Undeclared {
                    name: name.to_string(),
                });
            }

            let advance = start + OPEN.len() + end + CLOSE.len();
            segments.push(Segment::Placeholder {
                name: name.to_string(),
                raw: rest[start..advance].to_string(),
            });

            consumed += advance;
            rest = &rest[advance..];
        }

        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { segments })
    }

    /// Placeholder names in order of appearance (with repeats)
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Placeholder { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute values. A placeholder without a value is copied through as written.
    pub fn render(&self, values: &TemplateValues) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder { name, raw } => {
                    out.push_str(values.get(name).unwrap_or(raw.as_str()));
                }
            }
        }
        out
    }
}

/// Placeholder name → value mapping used for one render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateValues {
    values: HashMap<String, String>,
}

impl TemplateValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_declared_placeholders() {
        let t = Template::compile("<a>{{X}}</a><b>{{ Y }}</b>", &["X", "Y"]).unwrap();
        let out = t.render(&TemplateValues::new().with("X", "1").with("Y", "2"));
        assert_eq!(out, "<a>1</a><b>2</b>");
    }

    #[test]
    fn repeated_placeholders_all_substituted() {
        let t = Template::compile("{{X}}-{{X}}-{{X}}", &["X"]).unwrap();
        assert_eq!(t.render(&TemplateValues::new().with("X", "ab")), "ab-ab-ab");
        assert_eq!(t.placeholders().count(), 3);
    }

    #[test]
    fn missing_values_left_as_literal_tokens() {
        let t = Template::compile("a {{X}} b {{Y}}", &["X", "Y"]).unwrap();
        assert_eq!(t.render(&TemplateValues::new().with("X", "1")), "a 1 b {{Y}}");
    }

    #[test]
    fn missing_value_keeps_original_spacing() {
        let t = Template::compile("<a>{{ Y }}</a><b>{{Y  }}</b>", &["Y"]).unwrap();
        assert_eq!(
            t.render(&TemplateValues::new()),
            "<a>{{ Y }}</a><b>{{Y  }}</b>"
        );
        assert_eq!(t.placeholders().collect::<Vec<_>>(), vec!["Y", "Y"]);
    }

    #[test]
    fn undeclared_placeholder_is_rejected() {
        let err = Template::compile("{{X}} {{NOPE}}", &["X"]).unwrap_err();
        assert_eq!(
            err,
            TemplateError::Undeclared {
                name: "NOPE".to_string()
            }
        );
        assert_eq!(err.to_string(), "undeclared placeholder '{{NOPE}}'");
    }

    #[test]
    fn unterminated_placeholder_reports_offset() {
        let err = Template::compile("ok {{X}} then {{Y", &["X", "Y"]).unwrap_err();
        assert_eq!(err, TemplateError::Unterminated { offset: 14 });
    }

    #[test]
    fn text_without_placeholders_is_untouched() {
        let src = "<x a=\"{\" b=\"}\">%PLATFORM%</x>\n";
        let t = Template::compile(src, &[]).unwrap();
        assert_eq!(t.render(&TemplateValues::new()), src);
    }

    #[test]
    fn empty_template_renders_empty() {
        let t = Template::compile("", &["X"]).unwrap();
        assert_eq!(t.render(&TemplateValues::new()), "");
    }
}

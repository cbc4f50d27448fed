//! Reusable test content.

/// Archive tool stand-in: writes `<output>/<name>.rpf` listing the input tree.
///
/// Arguments arrive as `createarchive --input DIR --output DIR --name NAME`.
pub const FAKE_TOOL: &str = r#"ls -R "$3" > "$5/$7.rpf"
echo "packed $7""#;

/// Archive tool stand-in that always fails.
pub const FAILING_TOOL: &str = r#"echo "cannot open $3" >&2
exit 2"#;

pub const YMAP_CONTENT: &str = "<CMapData><name>test</name></CMapData>";

pub const YTD_CONTENT: &str = "texture dictionary";

pub const CONFIG_UNKNOWN_KEY: &str = r#"
[manifest]
levl_hash = "cayo"
"#;

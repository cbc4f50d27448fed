//! Isolated environment for running the mapdlc binary.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Result of running a mapdlc CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not JSON ({}): {}\n{}", e, l, self.stdout))
            })
            .collect()
    }
}

/// Temp working directory laid out the way `mapdlc` expects by default:
/// `mappings/` for input and `output/` for packages.
pub struct TestEnv {
    pub root: TempDir,
    tool: Option<PathBuf>,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("mappings")).expect("Failed to create mappings");
        Self {
            root,
            tool: None,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_mapdlc")),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn output_path(&self, relative: &str) -> PathBuf {
        self.path("output").join(relative)
    }

    /// Write a file under `mappings/`
    pub fn write_asset(&self, relative: &str, content: &str) {
        self.write_file(&format!("mappings/{}", relative), content);
    }

    pub fn create_project(&self, name: &str) {
        std::fs::create_dir_all(self.path("mappings").join(name))
            .expect("Failed to create project folder");
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let full = self.path(relative);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full, content).expect("Failed to write file");
    }

    /// Install a shell script as the archive tool
    #[cfg(unix)]
    pub fn with_tool_script(mut self, body: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path("bin/gtautil.sh");
        self.write_file("bin/gtautil.sh", &format!("#!/bin/sh\n{}\n", body));
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark tool executable");
        self.tool = Some(path);
        self
    }

    /// Point the archive tool at a path that does not exist
    pub fn with_missing_tool(mut self) -> Self {
        self.tool = Some(self.path("bin/not-installed"));
        self
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.root.path().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("MAPDLC_INPUT")
            .env_remove("MAPDLC_OUTPUT")
            .env_remove("MAPDLC_LEVEL_HASH")
            .env_remove("MAPDLC_EXTENSIONS");

        match &self.tool {
            Some(tool) => cmd.env("MAPDLC_TOOL", tool),
            None => cmd.env_remove("MAPDLC_TOOL"),
        };

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute mapdlc");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// List every file under `dir`, relative to it, sorted
pub fn list_files(dir: &Path) -> Vec<String> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    walk(base, &path, out);
                } else if let Ok(rel) = path.strip_prefix(base) {
                    out.push(rel.display().to_string());
                }
            }
        }
    }

    let mut files = Vec::new();
    walk(dir, dir, &mut files);
    files.sort();
    files
}

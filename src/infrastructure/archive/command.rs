//! Command Archive Builder
//!
//! Runs the external archiving tool:
//!
//! ```text
//! <tool> <verb> --input <dir> --output <dir> --name <base-name>
//! ```
//!
//! The call blocks until the tool exits. There is no timeout; a hung tool
//! stalls the run.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::domain::ports::{ArchiveBuilder, ArchiveOutcome};

/// Archive builder backed by an external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandArchiveBuilder {
    tool: PathBuf,
    verb: String,
    extension: String,
}

impl CommandArchiveBuilder {
    pub fn new(tool: impl Into<PathBuf>, verb: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            verb: verb.into(),
            extension: extension.into(),
        }
    }

    pub fn tool(&self) -> &Path {
        &self.tool
    }

    fn command(&self, input_dir: &Path, output_dir: &Path, archive_name: &str) -> Command {
        let mut cmd = Command::new(&self.tool);
        cmd.arg(&self.verb)
            .arg("--input")
            .arg(input_dir)
            .arg("--output")
            .arg(output_dir)
            .arg("--name")
            .arg(archive_name)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }
}

impl ArchiveBuilder for CommandArchiveBuilder {
    fn name(&self) -> &str {
        self.tool
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("archive tool")
    }

    fn extension(&self) -> &str {
        &self.extension
    }

    fn is_available(&self) -> bool {
        // A bare name is looked up on PATH, so probe by spawning it.
        if self.tool.components().count() > 1 {
            return self.tool.is_file();
        }

        Command::new(&self.tool)
            .arg("--help")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .is_ok()
    }

    fn build(&self, input_dir: &Path, output_dir: &Path, archive_name: &str) -> ArchiveOutcome {
        let output = match self.command(input_dir, output_dir, archive_name).output() {
            Ok(output) => output,
            Err(e) => {
                return ArchiveOutcome::failure(format!(
                    "failed to run {}: {}",
                    self.tool.display(),
                    e
                ));
            }
        };

        let diagnostic = captured_output(&output);
        if !output.status.success() {
            return ArchiveOutcome::failure(format!(
                "{} exited with {}{}",
                self.name(),
                output
                    .status
                    .code()
                    .map(|c| format!("code {}", c))
                    .unwrap_or_else(|| "a signal".to_string()),
                suffix(&diagnostic)
            ));
        }

        let expected = output_dir.join(format!("{}.{}", archive_name, self.extension));
        if !expected.is_file() {
            return ArchiveOutcome::failure(format!(
                "{} reported success but {} was not created{}",
                self.name(),
                expected.display(),
                suffix(&diagnostic)
            ));
        }

        ArchiveOutcome::success(diagnostic)
    }
}

fn captured_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    [stdout.trim(), stderr.trim()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

fn suffix(diagnostic: &str) -> String {
    if diagnostic.is_empty() {
        String::new()
    } else {
        format!(": {}", diagnostic)
    }
}

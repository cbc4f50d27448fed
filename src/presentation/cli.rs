//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Path and tool flags override every other configuration source

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// mapdlc - packages mapping folders into installable DLC packs
#[derive(Parser, Debug)]
#[command(name = "mapdlc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ./mapdlc.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Package every project folder into a DLC pack
    Build {
        #[command(flatten)]
        run: RunArgs,

        /// Leave temp_* staging directories in place (debugging)
        #[arg(long)]
        keep_staging: bool,
    },

    /// Show what build would do without writing anything
    Plan {
        #[command(flatten)]
        run: RunArgs,
    },

    /// Validate configuration, templates and the archive tool
    Check {
        #[command(flatten)]
        run: RunArgs,
    },
}

/// Flags shared by every command that reads projects
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Directory holding one folder per mapping project
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Directory receiving the packages
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Archive tool executable
    #[arg(long, value_name = "PATH")]
    pub tool: Option<PathBuf>,

    /// Level name hash written into content.xml
    #[arg(long, value_name = "HASH")]
    pub level_hash: Option<String>,

    /// Only process this project folder (repeatable)
    #[arg(long = "project", value_name = "NAME")]
    pub projects: Vec<String>,
}

impl RunArgs {
    /// Layer CLI flags over an already resolved configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config.paths.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.paths.output = output.clone();
        }
        if let Some(tool) = &self.tool {
            config.archive.tool = tool.clone();
        }
        if let Some(level_hash) = &self.level_hash {
            config.manifest.level_hash = level_hash.clone();
        }
        config
    }
}

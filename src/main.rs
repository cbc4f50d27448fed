//! mapdlc CLI - packages map asset folders into DLC packs
//!
//! Usage: mapdlc <COMMAND>
//!
//! Commands:
//!   build   Package every project under the input directory
//!   plan    Show what build would produce without writing anything
//!   check   Validate config, templates, paths and the archive tool

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use mapdlc::presentation::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprint!("{}", ui::error::format_error(&err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();

    match &cli.command {
        Commands::Build { run, keep_staging } => commands::build::cmd_build(
            config,
            run,
            *keep_staging,
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Plan { run } => {
            commands::plan::cmd_plan(config, run, cli.json, cli.verbose, cli.color)
        }
        Commands::Check { run } => {
            commands::check::cmd_check(config, run, cli.json, cli.verbose, cli.color)
        }
    }
}

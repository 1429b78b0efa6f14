//! Scopecheck CLI - recommended-settings auditor
//!
//! Usage: scopecheck <COMMAND>
//!
//! Commands:
//!   check  Audit a configuration snapshot against recommended settings
//!   rules  List the effective rule catalog

mod cli;
mod commands;
mod render;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            snapshot,
            rules,
            strict,
        } => commands::check::cmd_check(
            snapshot,
            rules,
            strict,
            cli.json,
            cli.verbose,
            cli.color,
            cli.ascii,
        ),
        Commands::Rules { rules } => commands::rules::cmd_rules(rules.as_deref(), cli.json),
    }
}

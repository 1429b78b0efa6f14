use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Scopecheck - recommended-settings auditor for layered storefront
/// configuration
#[derive(Parser, Debug)]
#[command(name = "scopecheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to use colored output (defaults to auto-detection)
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Use plain ASCII icons
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audit a configuration snapshot against recommended settings
    Check {
        /// Path to the configuration snapshot (TOML)
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Path to a rule catalog (defaults to user rules, then built-ins)
        #[arg(short, long)]
        rules: Option<PathBuf>,

        /// Fail on warnings too (CI mode)
        #[arg(long)]
        strict: bool,
    },

    /// List the effective rule catalog
    Rules {
        /// Path to a rule catalog (defaults to user rules, then built-ins)
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },
}

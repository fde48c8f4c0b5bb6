mod check;
mod dump;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to config file
        path: Option<PathBuf>,
    },

    /// Print resolved configuration
    Dump {
        /// Path to config file
        path: Option<PathBuf>,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

/// `fallback` is the global `--config` path, used when the subcommand names none.
pub fn run(cmd: ConfigCmd, fallback: Option<&Path>) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path.as_deref().or(fallback)),
        ConfigCmd::Dump { path, json, yaml } => dump(path.as_deref().or(fallback), json, yaml),
    }
}

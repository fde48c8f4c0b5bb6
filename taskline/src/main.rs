use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use taskline_core::cli;
use taskline_core::cli::trace::{TraceArgs, run_trace};
use taskline_core::conf::resolve_config;
use taskline_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "taskline",
    version,
    about = "Taskline: narrate director task event streams"
)]
struct Cli {
    /// Path to a taskline config file (defaults to $TASKLINE_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a task event stream (default, reading stdin)
    Trace(TraceArgs),

    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("!!! {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Command::Config { cmd }) => cli::conf::run(cmd, cli.config.as_deref()),
        Some(Command::Trace(args)) => trace(&args, cli.config.as_deref()),
        None => trace(&TraceArgs::default(), cli.config.as_deref()),
    }
}

fn trace(args: &TraceArgs, config: Option<&Path>) -> anyhow::Result<()> {
    let cfg = resolve_config(config).context("failed to load taskline config")?;
    init_logging(&cfg.logging);

    tracing::debug!(format = ?args.format, file = ?args.file, "tracing event stream");
    run_trace(args, &cfg)
}

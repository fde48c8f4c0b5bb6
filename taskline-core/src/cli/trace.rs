use crate::conf::{OutputFormat, OutputMode, TasklineConfig};
use crate::markup::backend;
use crate::trace::{Tracer, passthrough};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Args, Debug, Default)]
pub struct TraceArgs {
    /// Event stream to read (one JSON event per line); `-` or nothing reads stdin
    pub file: Option<PathBuf>,

    /// Output format, overriding the config file
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not report malformed lines on stderr
    #[arg(long)]
    pub no_diagnostics: bool,
}

/// Narrate an event stream to stdout.
pub fn run_trace(args: &TraceArgs, cfg: &TasklineConfig) -> Result<()> {
    let input = open_input(args.file.as_deref())?;
    let format = args.format.unwrap_or(cfg.output.format);

    let stdout = io::stdout();
    let mode = format.resolve(stdout.is_terminal());
    let mut out = stdout.lock();

    match mode {
        OutputMode::Raw => {
            let copied = passthrough(&mut out, input)?;
            debug!(lines = copied, "raw passthrough finished");
        }
        OutputMode::Rendered(kind) => {
            let mut tracer = Tracer::new(backend(kind));
            if args.no_diagnostics || !cfg.diagnostics.enabled {
                tracer = tracer.without_diagnostics();
            }
            tracer.trace(&mut out, input)?;
        }
    }

    Ok(())
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("failed to open event stream {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(io::stdin().lock())),
    }
}

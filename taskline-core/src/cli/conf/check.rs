use crate::conf::error::ConfigError;
use crate::conf::{config_path, load_config};
use std::path::Path;

pub fn check(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = config_path(path) else {
        println!("✔ No config file given, built-in defaults apply");
        return Ok(());
    };

    match load_config(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ output format: {}", cfg.output.format.name());
            println!(
                "✔ diagnostics {}",
                if cfg.diagnostics.enabled {
                    "enabled"
                } else {
                    "disabled"
                }
            );
            println!(
                "✔ log level: {}{}",
                cfg.logging.level,
                if cfg.logging.json { " (json)" } else { "" }
            );
            Ok(())
        }
        Err(err) => {
            print_config_error(&err);
            std::process::exit(1);
        }
    }
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{err}");
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{hint}");
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Parse { .. } => Some(
            "Config files are TOML with three optional sections.\n\
             \n\
             Example:\n\
             \n\
             [output]\n\
             format = \"auto\"   # auto | ansi | plain | html | raw\n\
             \n\
             [diagnostics]\n\
             enabled = true\n\
             \n\
             [logging]\n\
             level = \"warn\"\n\
             json  = false",
        ),

        ConfigError::InvalidLogLevel { .. } => Some(
            "Log levels use tracing filter directives.\n\
             \n\
             Examples: \"info\", \"taskline_core=debug\", \"warn,taskline_core::trace=trace\"",
        ),

        ConfigError::ReadFile { .. } => None,
    }
}

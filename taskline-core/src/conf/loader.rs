use crate::conf::{ConfigError, TasklineConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "TASKLINE_CONFIG";

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<TasklineConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg: TasklineConfig = toml::from_str(&text).map_err(|e| ConfigError::parse(path, e))?;
    validate(&cfg)?;
    Ok(cfg)
}

/// Pick the config source: explicit path, then `$TASKLINE_CONFIG`, then defaults.
pub fn resolve_config(explicit: Option<&Path>) -> Result<TasklineConfig, ConfigError> {
    match config_path(explicit) {
        Some(path) => load_config(&path),
        None => Ok(TasklineConfig::default()),
    }
}

pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from))
}

pub fn validate(cfg: &TasklineConfig) -> Result<(), ConfigError> {
    EnvFilter::try_new(&cfg.logging.level).map_err(|source| ConfigError::InvalidLogLevel {
        level: cfg.logging.level.clone(),
        source,
    })?;
    Ok(())
}

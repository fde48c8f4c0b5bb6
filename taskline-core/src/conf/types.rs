use crate::markup::BackendKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TasklineConfig {
    pub output: OutputConfig,
    pub diagnostics: DiagnosticsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// Write `!!!` lines for malformed input to stderr.
    pub enabled: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` wins when set.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ANSI colors on a terminal, plain text otherwise.
    #[default]
    Auto,
    Ansi,
    Plain,
    Html,
    /// Copy input lines through without rendering.
    Raw,
}

/// What the trace command actually does once the format is settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Raw,
    Rendered(BackendKind),
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Auto => "auto",
            OutputFormat::Ansi => "ansi",
            OutputFormat::Plain => "plain",
            OutputFormat::Html => "html",
            OutputFormat::Raw => "raw",
        }
    }

    pub fn resolve(self, stdout_is_terminal: bool) -> OutputMode {
        match self {
            OutputFormat::Auto if stdout_is_terminal => OutputMode::Rendered(BackendKind::Ansi),
            OutputFormat::Auto => OutputMode::Rendered(BackendKind::Plain),
            OutputFormat::Ansi => OutputMode::Rendered(BackendKind::Ansi),
            OutputFormat::Plain => OutputMode::Rendered(BackendKind::Plain),
            OutputFormat::Html => OutputMode::Rendered(BackendKind::Html),
            OutputFormat::Raw => OutputMode::Raw,
        }
    }
}

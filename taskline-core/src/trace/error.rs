use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read event stream: {0}")]
    Read(#[source] io::Error),

    #[error("failed to write narrative: {0}")]
    Write(#[source] io::Error),

    /// An event that is neither a deprecation, a task state nor an error code.
    #[error("unrecognized event on input line {line}: {text}")]
    Unrecognized { line: u64, text: String },
}

//! Task event records and the first two steps of the pipeline.
//!
//! A director streams one JSON object per line while a task runs. Each line is
//! decoded into an [`Event`], then classified into a [`Category`] that tells the
//! narrative renderer what to do with it:
//!
//! input line
//! decode_line
//! Event
//! classify
//! Category
//!

mod classify;
mod parse;
mod types;

pub use classify::*;
pub use parse::*;
pub use types::*;

//! The driver: pumps an input stream through decode, classify and render.
//!
//! input
//! LineReader
//! decode_line
//! classify
//! render
//! Backend -> output
//!

mod error;
mod lines;
mod raw;
mod run;

pub use error::*;
pub use raw::passthrough;
pub use run::*;

pub mod cli;
pub mod conf;
pub mod event;
pub mod logging;
pub mod markup;
pub mod narrative;
pub mod trace;

pub use trace::{TraceError, TraceSummary, Tracer, trace};

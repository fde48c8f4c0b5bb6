use crate::event::types::{Event, STATE_FAILED, STATE_FINISHED, STATE_STARTED, TYPE_DEPRECATION};

/// What the narrative does with a decoded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Informational notice; dropped before rendering and never counted.
    Deprecation,
    Started,
    Finished,
    Failed,
    /// Director-level error with no task state attached.
    ErrorCode,
    /// Anything else is a protocol violation and aborts the trace.
    Unrecognized,
}

pub fn classify(event: &Event) -> Category {
    if event.kind == TYPE_DEPRECATION {
        return Category::Deprecation;
    }

    match event.state.as_str() {
        STATE_STARTED => Category::Started,
        STATE_FINISHED => Category::Finished,
        STATE_FAILED => Category::Failed,
        _ if event.error.code > 0 => Category::ErrorCode,
        _ => Category::Unrecognized,
    }
}

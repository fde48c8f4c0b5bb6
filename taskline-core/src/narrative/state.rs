use crate::event::{Event, TaskKey};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// When each `(stage, task)` pair last reported `started`.
///
/// Entries are overwritten by a later start and never removed.
#[derive(Debug, Clone, Default)]
pub struct StartRegistry {
    started: HashMap<TaskKey, DateTime<Utc>>,
}

impl StartRegistry {
    pub fn record(&mut self, key: TaskKey, at: DateTime<Utc>) {
        self.started.insert(key, at);
    }

    pub fn started_at(&self, key: &TaskKey) -> Option<DateTime<Utc>> {
        self.started.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.started.len()
    }

    pub fn is_empty(&self) -> bool {
        self.started.is_empty()
    }
}

/// State recorded for the last rendered block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mark {
    /// The event's own `state` field, as read.
    Wire(String),
    /// A `finished` event was folded into the open line of its start.
    DoneInline,
    /// A `failed` event was folded into the open line of its start.
    FailedInline,
}

impl Default for Mark {
    fn default() -> Self {
        Mark::Wire(String::new())
    }
}

/// The `(stage, task, state)` triple of the most recently rendered event.
///
/// This is not the last event read: deprecations and malformed lines never
/// touch it, and inline closes replace the wire state with a [`Mark`] of their
/// own. A closed line therefore never matches a wire state, and whatever
/// standalone block follows it is separated from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastRendered {
    pub stage: String,
    pub task: String,
    pub mark: Mark,
}

impl LastRendered {
    pub fn from_event(event: &Event) -> Self {
        Self::with_mark(event, Mark::Wire(event.state.clone()))
    }

    pub fn with_mark(event: &Event, mark: Mark) -> Self {
        Self {
            stage: event.stage.clone(),
            task: event.task.clone(),
            mark,
        }
    }

    pub fn same_task(&self, event: &Event) -> bool {
        self.stage == event.stage && self.task == event.task
    }

    pub fn has_state(&self, state: &str) -> bool {
        matches!(&self.mark, Mark::Wire(s) if s == state)
    }
}

#[derive(Debug, Clone, Default)]
pub struct NarrativeState {
    pub registry: StartRegistry,
    pub last: LastRendered,
}

impl NarrativeState {
    pub fn new() -> Self {
        Self::default()
    }
}

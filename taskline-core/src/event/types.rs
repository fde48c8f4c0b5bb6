use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

pub const STATE_STARTED: &str = "started";
pub const STATE_FINISHED: &str = "finished";
pub const STATE_FAILED: &str = "failed";
pub const TYPE_DEPRECATION: &str = "deprecation";

/// Key under `data` carrying the failure detail of a `failed` event.
pub const DATA_ERROR: &str = "error";

/// One progress record emitted by the director while a task executes.
///
/// Every field is optional on the wire; absent and `null` values decode to
/// the zero value so that partially populated records still flow through.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Event {
    /// Epoch seconds.
    pub time: i64,
    #[serde(deserialize_with = "nullable")]
    pub stage: String,
    #[serde(deserialize_with = "nullable")]
    pub task: String,
    pub index: i64,
    pub total: i64,
    #[serde(deserialize_with = "nullable")]
    pub state: String,
    pub progress: i64,

    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: String,
    #[serde(deserialize_with = "nullable")]
    pub message: String,
    #[serde(deserialize_with = "nullable")]
    pub data: BTreeMap<String, String>,

    #[serde(deserialize_with = "nullable")]
    pub error: EventError,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct EventError {
    pub code: i64,
    #[serde(deserialize_with = "nullable")]
    pub message: String,
}

/// Grouping key for start-time bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskKey {
    pub stage: String,
    pub task: String,
}

impl Event {
    pub fn key(&self) -> TaskKey {
        TaskKey {
            stage: self.stage.clone(),
            task: self.task.clone(),
        }
    }

    /// Event time as a UTC instant. Out-of-range values collapse to the epoch.
    pub fn timestamp(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.time, 0).unwrap_or_default()
    }

    pub fn error_detail(&self) -> &str {
        self.data.get(DATA_ERROR).map(String::as_str).unwrap_or("")
    }
}

fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

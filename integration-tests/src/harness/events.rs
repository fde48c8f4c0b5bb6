use serde_json::{Value, json};

/// Builder for one line of a director task event stream.
#[derive(Debug, Clone)]
pub struct EventLine {
    value: Value,
}

impl EventLine {
    fn task(time: i64, stage: &str, task: &str, state: &str) -> Self {
        Self {
            value: json!({
                "time": time,
                "stage": stage,
                "tags": [],
                "total": 1,
                "task": task,
                "index": 1,
                "state": state,
                "progress": if state == "started" { 0 } else { 100 },
            }),
        }
    }

    pub fn started(time: i64, stage: &str, task: &str) -> Self {
        Self::task(time, stage, task, "started")
    }

    pub fn finished(time: i64, stage: &str, task: &str) -> Self {
        Self::task(time, stage, task, "finished")
    }

    pub fn failed(time: i64, stage: &str, task: &str, error: &str) -> Self {
        let mut line = Self::task(time, stage, task, "failed");
        line.value["data"] = json!({ "error": error });
        line
    }

    pub fn deprecation(time: i64, message: &str) -> Self {
        Self {
            value: json!({ "time": time, "type": "deprecation", "message": message }),
        }
    }

    pub fn oops(time: i64, code: i64, message: &str) -> Self {
        Self {
            value: json!({ "time": time, "error": { "code": code, "message": message } }),
        }
    }

    pub fn to_line(&self) -> String {
        self.value.to_string()
    }
}

/// Join event lines into a newline-terminated stream.
pub fn stream(lines: &[EventLine]) -> String {
    lines.iter().map(|l| l.to_line() + "\n").collect()
}

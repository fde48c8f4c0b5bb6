use crate::event::types::Event;
use thiserror::Error;

/// A single input line that could not be decoded into an [`Event`].
///
/// Decode failures are local to their line and never end a trace.
#[derive(Debug, Error)]
#[error("input line {line}: {source}")]
pub struct DecodeError {
    /// 1-based line number within the input.
    pub line: u64,
    #[source]
    pub source: serde_json::Error,
}

/// Decode one newline-stripped input line.
///
/// Bytes that are not UTF-8 are rejected by the JSON parser, so they surface as
/// a regular decode failure instead of a read error.
pub fn decode_line(line: u64, bytes: &[u8]) -> Result<Event, DecodeError> {
    serde_json::from_slice(bytes).map_err(|source| DecodeError { line, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_record() {
        let line = br#"{"time":1700000000,"stage":"Updating instance","task":"web/0","index":1,"total":3,"state":"failed","progress":100,"data":{"error":"timed out"},"tags":["web"]}"#;

        let event = decode_line(1, line).unwrap();

        assert_eq!(event.time, 1_700_000_000);
        assert_eq!(event.stage, "Updating instance");
        assert_eq!(event.task, "web/0");
        assert_eq!(event.index, 1);
        assert_eq!(event.total, 3);
        assert_eq!(event.state, "failed");
        assert_eq!(event.progress, 100);
        assert_eq!(event.error_detail(), "timed out");
    }

    #[test]
    fn missing_and_null_fields_take_zero_values() {
        let event = decode_line(1, br#"{"stage":null,"data":null,"error":null}"#).unwrap();

        assert_eq!(event, Event::default());
        assert_eq!(event.error_detail(), "");
    }

    #[test]
    fn decodes_error_record() {
        let event =
            decode_line(1, br#"{"time":5,"error":{"code":450001,"message":"no such deployment"}}"#)
                .unwrap();

        assert_eq!(event.error.code, 450001);
        assert_eq!(event.error.message, "no such deployment");
    }

    #[test]
    fn rejects_malformed_json_with_line_number() {
        let err = decode_line(7, b"{\"time\": ").unwrap_err();

        assert_eq!(err.line, 7);
        assert!(err.to_string().starts_with("input line 7: "));
    }

    #[test]
    fn rejects_empty_line() {
        assert!(decode_line(1, b"").is_err());
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert!(decode_line(1, b"{\"stage\":\"\xff\"}").is_err());
    }

    #[test]
    fn rejects_non_string_data_values() {
        assert!(decode_line(1, br#"{"data":{"error":42}}"#).is_err());
    }
}

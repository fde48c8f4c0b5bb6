use chrono::{DateTime, Utc};

/// Elapsed time between two instants as `HH:MM:SS`.
///
/// Clock skew between start and end is clamped to zero. Hours are not
/// wrapped, so very long tasks render as e.g. `123:04:05`.
pub fn lapse(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let secs = (end - start).num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(lapse(at(0), at(0)), "00:00:00");
        assert_eq!(lapse(at(0), at(1)), "00:00:01");
        assert_eq!(lapse(at(100), at(100 + 3 * 3600 + 25 * 60 + 9)), "03:25:09");
    }

    #[test]
    fn hours_do_not_wrap() {
        assert_eq!(lapse(at(0), at(123 * 3600 + 4 * 60 + 5)), "123:04:05");
    }

    #[test]
    fn negative_spans_clamp_to_zero() {
        assert_eq!(lapse(at(50), at(10)), "00:00:00");
    }
}

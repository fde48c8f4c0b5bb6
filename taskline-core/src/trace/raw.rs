use crate::trace::TraceError;
use crate::trace::lines::LineReader;
use std::io::{BufRead, Write};

/// Copy the event stream through untouched, one line at a time.
///
/// Returns the number of lines copied.
pub fn passthrough<W: Write, R: BufRead>(out: &mut W, input: R) -> Result<u64, TraceError> {
    let mut lines = LineReader::new(input);
    let mut copied = 0;

    while let Some((_, line)) = lines.next_line().map_err(TraceError::Read)? {
        out.write_all(line).map_err(TraceError::Write)?;
        out.write_all(b"\n").map_err(TraceError::Write)?;
        copied += 1;
    }
    out.flush().map_err(TraceError::Write)?;

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_lines_verbatim() {
        let mut out = Vec::new();
        let n = passthrough(&mut out, &b"{\"state\":\"started\"}\r\nnot json"[..]).unwrap();

        assert_eq!(n, 2);
        assert_eq!(out, b"{\"state\":\"started\"}\nnot json\n");
    }
}

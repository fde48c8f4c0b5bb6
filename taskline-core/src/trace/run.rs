use crate::event::{Category, DecodeError, classify, decode_line};
use crate::markup::{Backend, Markup, Plain, Tone};
use crate::narrative::{NarrativeState, render};
use crate::trace::TraceError;
use crate::trace::lines::LineReader;
use std::io::{self, BufRead, BufReader, Read, Write};
use tracing::{debug, error, info, warn};

/// Counters for one pass over an event stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceSummary {
    /// Events rendered into the narrative.
    pub processed: u64,
    /// Lines skipped because they did not decode.
    pub malformed: u64,
    /// Deprecation notices dropped.
    pub suppressed: u64,
}

/// Renders task event streams into a narrative.
///
/// The narrative state lives as long as the tracer, so consecutive calls to
/// [`Tracer::trace`] continue the same story. Malformed lines are reported to
/// the diagnostics sink (stderr unless replaced) and skipped.
pub struct Tracer {
    backend: Box<dyn Backend>,
    diagnostics: Option<Box<dyn Write>>,
    state: NarrativeState,
}

impl Tracer {
    pub fn new(backend: Box<dyn Backend>) -> Self {
        Self {
            backend,
            diagnostics: Some(Box::new(io::stderr())),
            state: NarrativeState::new(),
        }
    }

    pub fn with_diagnostics(mut self, sink: impl Write + 'static) -> Self {
        self.diagnostics = Some(Box::new(sink));
        self
    }

    pub fn without_diagnostics(mut self) -> Self {
        self.diagnostics = None;
        self
    }

    pub fn state(&self) -> &NarrativeState {
        &self.state
    }

    /// Read `input` to the end, writing the narrative to `out` as it goes.
    ///
    /// Stops at the first read or write failure, or at an unrecognized event.
    /// Output already written is left in place.
    pub fn trace<W: Write, R: BufRead>(
        &mut self,
        out: &mut W,
        input: R,
    ) -> Result<TraceSummary, TraceError> {
        let mut lines = LineReader::new(input);
        let mut summary = TraceSummary::default();

        while let Some((number, line)) = lines.next_line().map_err(TraceError::Read)? {
            let event = match decode_line(number, line) {
                Ok(event) => event,
                Err(err) => {
                    summary.malformed += 1;
                    self.diagnose(&err);
                    continue;
                }
            };

            let category = classify(&event);
            debug!(
                line = number,
                stage = %event.stage,
                task = %event.task,
                state = %event.state,
                ?category,
                "classified event"
            );

            match category {
                Category::Deprecation => {
                    summary.suppressed += 1;
                    continue;
                }
                Category::Unrecognized => {
                    let text = String::from_utf8_lossy(line).into_owned();
                    error!(line = number, %text, "unrecognized event, aborting trace");
                    return Err(TraceError::Unrecognized { line: number, text });
                }
                _ => {}
            }

            let (markup, next) = render(category, &event, std::mem::take(&mut self.state));
            self.state = next;
            self.emit(out, &markup)?;
            summary.processed += 1;
        }

        if summary.processed > 0 {
            out.write_all(b"\n\n").map_err(TraceError::Write)?;
        }
        out.flush().map_err(TraceError::Write)?;

        info!(
            processed = summary.processed,
            malformed = summary.malformed,
            suppressed = summary.suppressed,
            "event stream finished"
        );
        Ok(summary)
    }

    fn emit<W: Write>(&self, out: &mut W, markup: &Markup) -> Result<(), TraceError> {
        self.backend
            .write_markup(&mut *out, markup)
            .map_err(TraceError::Write)?;
        // Open lines must show up while the task is still running.
        out.flush().map_err(TraceError::Write)
    }

    fn diagnose(&mut self, err: &DecodeError) {
        warn!(line = err.line, error = %err.source, "skipping malformed event");

        if let Some(sink) = self.diagnostics.as_mut() {
            let mut markup = Markup::new();
            markup.toned(Tone::Danger, format!("!!! {err}")).text("\n");
            // Best effort: a broken diagnostics sink never ends the trace.
            let _ = self.backend.write_markup(&mut **sink, &markup);
        }
    }
}

/// Trace `input` into `out` as plain text, with diagnostics on stderr.
pub fn trace<W: Write, R: Read>(out: &mut W, input: R) -> Result<TraceSummary, TraceError> {
    Tracer::new(Box::new(Plain)).trace(out, BufReader::new(input))
}

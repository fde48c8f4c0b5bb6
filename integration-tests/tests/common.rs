use integration_tests::harness::SharedBuffer;
use std::path::PathBuf;
use taskline_core::markup::{BackendKind, backend};
use taskline_core::{TraceError, TraceSummary, Tracer};

#[allow(dead_code)]
pub fn fixture(file: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file);

    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

pub struct Narration {
    pub output: String,
    pub diagnostics: String,
    pub result: Result<TraceSummary, TraceError>,
}

/// Run a fresh tracer over `input`, capturing output and diagnostics.
pub fn narrate_with(kind: BackendKind, input: &[u8]) -> Narration {
    let diagnostics = SharedBuffer::default();
    let mut out = Vec::new();

    let result = Tracer::new(backend(kind))
        .with_diagnostics(diagnostics.clone())
        .trace(&mut out, input);

    Narration {
        output: String::from_utf8(out).expect("narrative is UTF-8"),
        diagnostics: diagnostics.contents(),
        result,
    }
}

#[allow(dead_code)]
pub fn narrate(input: &str) -> Narration {
    narrate_with(BackendKind::Plain, input.as_bytes())
}

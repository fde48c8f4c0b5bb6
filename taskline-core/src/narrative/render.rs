use crate::event::{Category, Event, STATE_FAILED, STATE_FINISHED, STATE_STARTED};
use crate::markup::{Markup, Tone};
use crate::narrative::lapse::lapse;
use crate::narrative::state::{LastRendered, Mark, NarrativeState};

const SEPARATOR: &str = "\n";

/// Render one classified event against the current narrative state.
///
/// Returns the text to emit and the state to use for the next event.
/// `Deprecation` and `Unrecognized` never reach the narrative; they render as
/// nothing and leave the state untouched.
pub fn render(category: Category, event: &Event, state: NarrativeState) -> (Markup, NarrativeState) {
    match category {
        Category::Started => started(event, state),
        Category::Finished => finished(event, state),
        Category::Failed => failed(event, state),
        Category::ErrorCode => error_code(event, state),
        Category::Deprecation | Category::Unrecognized => (Markup::new(), state),
    }
}

fn started(event: &Event, mut state: NarrativeState) -> (Markup, NarrativeState) {
    let mut out = Markup::new();

    state.registry.record(event.key(), event.timestamp());
    if !(state.last.same_task(event) && state.last.has_state(STATE_STARTED)) {
        out.text(SEPARATOR);
    }

    // Left open: a directly following close is appended to this line.
    out.text("  ")
        .toned(Tone::Success, "Started")
        .text(format!(" {} > ", event.stage.to_lowercase()))
        .toned(Tone::Emphasis, event.task.as_str());

    state.last = LastRendered::from_event(event);
    (out, state)
}

fn finished(event: &Event, mut state: NarrativeState) -> (Markup, NarrativeState) {
    let mut out = Markup::new();
    let duration = elapsed(event, &state);

    if state.last.same_task(event) {
        out.text(". ").toned(Tone::Success, "Done");
        duration_clause(&mut out, duration.as_deref());
        state.last = LastRendered::with_mark(event, Mark::DoneInline);
    } else {
        if !state.last.has_state(STATE_FINISHED) {
            out.text(SEPARATOR);
        }
        out.text("\n     ")
            .toned(Tone::Success, "Done")
            .text(format!(" {} > ", event.stage.to_lowercase()))
            .toned(Tone::Emphasis, event.task.to_lowercase())
            .text(".");
        duration_clause(&mut out, duration.as_deref());
        state.last = LastRendered::from_event(event);
    }

    (out, state)
}

fn failed(event: &Event, mut state: NarrativeState) -> (Markup, NarrativeState) {
    let mut out = Markup::new();

    if state.last.same_task(event) {
        out.text(". ").toned(Tone::Danger, "FAILED");
        error_detail(&mut out, event);
        state.last = LastRendered::with_mark(event, Mark::FailedInline);
    } else {
        if !state.last.has_state(STATE_FAILED) {
            out.text(SEPARATOR);
        }
        out.text("\n   ")
            .toned(
                Tone::Danger,
                format!("FAILED {}", event.stage.to_lowercase()),
            )
            .text(" > ")
            .toned(Tone::Warning, event.task.to_lowercase())
            .text(".");
        error_detail(&mut out, event);
        state.last = LastRendered::from_event(event);
    }

    (out, state)
}

fn error_code(event: &Event, mut state: NarrativeState) -> (Markup, NarrativeState) {
    let mut out = Markup::new();

    if !state.last.has_state(&event.state) {
        out.text(SEPARATOR);
    }
    out.text("\n   ")
        .toned(Tone::Danger, format!("OOPS: {}", event.error.message))
        .text(" (error ")
        .toned(Tone::Warning, event.error.code.to_string())
        .text(")");

    state.last = LastRendered::from_event(event);
    (out, state)
}

fn elapsed(event: &Event, state: &NarrativeState) -> Option<String> {
    state
        .registry
        .started_at(&event.key())
        .map(|start| lapse(start, event.timestamp()))
}

fn duration_clause(out: &mut Markup, duration: Option<&str>) {
    if let Some(duration) = duration {
        out.text(" (").toned(Tone::Warning, duration).text(")");
    }
}

fn error_detail(out: &mut Markup, event: &Event) {
    out.text("\n      ")
        .toned(Tone::Danger, "!!!")
        .text(format!(" {}", event.error_detail()));
}

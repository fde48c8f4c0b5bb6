use integration_tests::harness::{EventLine, stream};
use pretty_assertions::assert_eq;
use taskline_core::markup::BackendKind;

mod common;

fn failing_task() -> String {
    stream(&[
        EventLine::started(0, "Updating instance", "db/0"),
        EventLine::failed(9, "Updating instance", "db/0", "disk <full> & stuck"),
    ])
}

#[test]
fn html_escapes_and_tags_tones() {
    let n = common::narrate_with(BackendKind::Html, failing_task().as_bytes());

    assert_eq!(
        n.output,
        "\n  <span class=\"tone-success\">Started</span> updating instance &gt; \
         <span class=\"tone-emphasis\">db/0</span>. <span class=\"tone-danger\">FAILED</span>\
         \n      <span class=\"tone-danger\">!!!</span> disk &lt;full&gt; &amp; stuck\n\n"
    );
}

#[test]
fn ansi_and_plain_share_the_same_text() {
    let ansi = common::narrate_with(BackendKind::Ansi, failing_task().as_bytes());
    let plain = common::narrate_with(BackendKind::Plain, failing_task().as_bytes());

    assert_ne!(ansi.output, plain.output);
    assert!(ansi.output.contains('\x1b'));
    assert_eq!(
        plain.output,
        "\n  Started updating instance > db/0. FAILED\n      !!! disk <full> & stuck\n\n"
    );
}

#[test]
fn diagnostics_use_the_backend() {
    let n = common::narrate_with(BackendKind::Html, b"<nope>\n");

    assert!(n.diagnostics.starts_with("<span class=\"tone-danger\">!!! input line 1: "));
    assert!(n.diagnostics.ends_with("</span>\n"));
}

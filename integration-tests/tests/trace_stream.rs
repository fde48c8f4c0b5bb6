use integration_tests::harness::{EventLine, FailingReader, stream};
use pretty_assertions::assert_eq;
use std::io;
use taskline_core::{TraceError, TraceSummary, trace};

mod common;

#[test]
fn start_and_finish_render_as_one_block() {
    // Arrange
    let input = concat!(
        r#"{"time":0,"stage":"Preparing","task":"Warming cache","state":"started"}"#,
        "\n",
        r#"{"time":1,"stage":"Preparing","task":"Warming cache","state":"finished"}"#,
        "\n",
    );

    // Act
    let n = common::narrate(input);

    // Assert
    assert_eq!(
        n.output,
        "\n  Started preparing > Warming cache. Done (00:00:01)\n\n"
    );
    assert_eq!(n.diagnostics, "");
}

#[test]
fn deprecation_only_stream_is_silent() {
    let input = stream(&[EventLine::deprecation(0, "Ignoring cloud config")]);

    let n = common::narrate(&input);

    assert_eq!(n.output, "");
    assert_eq!(
        n.result.unwrap(),
        TraceSummary {
            processed: 0,
            malformed: 0,
            suppressed: 1,
        }
    );
}

#[test]
fn deprecations_never_reach_output() {
    let input = stream(&[
        EventLine::started(0, "Deploy", "a"),
        EventLine::deprecation(0, "DEPRECATION-MARKER"),
        EventLine::finished(4, "Deploy", "a"),
    ]);

    let n = common::narrate(&input);

    assert!(!n.output.contains("DEPRECATION-MARKER"));
    // The deprecation did not break the open line.
    assert_eq!(n.output, "\n  Started deploy > a. Done (00:00:04)\n\n");
    assert_eq!(n.result.unwrap().processed, 2);
}

#[test]
fn finish_without_start_has_no_duration() {
    let input = stream(&[EventLine::finished(30, "Compiling packages", "Golang/1.21")]);

    let n = common::narrate(&input);

    assert_eq!(n.output, "\n\n     Done compiling packages > golang/1.21.\n\n");
    assert!(n.result.is_ok());
}

#[test]
fn interleaved_tasks_stay_separate() {
    let input = stream(&[
        EventLine::started(0, "Updating instance", "web/0"),
        EventLine::started(0, "Updating instance", "web/1"),
        EventLine::finished(2, "Updating instance", "web/1"),
        EventLine::finished(3, "Updating instance", "web/0"),
    ]);

    let n = common::narrate(&input);

    assert_eq!(
        n.output,
        "\n  Started updating instance > web/0\
         \n  Started updating instance > web/1. Done (00:00:02)\
         \n\
         \n     Done updating instance > web/0. (00:00:03)\
         \n\n"
    );
}

#[test]
fn error_code_between_blocks_is_separated() {
    let input = stream(&[
        EventLine::started(0, "Deploy", "a"),
        EventLine::failed(1, "Deploy", "b", "b exploded"),
        EventLine::oops(1, 100, "Task 42 cancelled"),
        EventLine::finished(2, "Deploy", "a"),
    ]);

    let n = common::narrate(&input);

    assert_eq!(
        n.output,
        "\n  Started deploy > a\
         \n\
         \n   FAILED deploy > b.\
         \n      !!! b exploded\
         \n\
         \n   OOPS: Task 42 cancelled (error 100)\
         \n\
         \n     Done deploy > a. (00:00:02)\
         \n\n"
    );
}

#[test]
fn realistic_deploy_fixture() {
    let n = common::narrate(&common::fixture("deploy.jsonl"));

    assert_eq!(
        n.output,
        "\n  Started preparing deployment > Preparing deployment. Done (00:00:01)\
         \n  Started preparing package compilation > Finding packages to compile. Done (00:00:00)\
         \n  Started updating instance > web/0 (canary)\
         \n  Started updating instance > web/1\
         \n\
         \n     Done updating instance > web/0 (canary). (00:01:02)\
         \n\
         \n   FAILED updating instance > web/1.\
         \n      !!! 'web/1' is not running after update\
         \n\
         \n   OOPS: 'web/1' is not running after update (error 450001)\
         \n\n"
    );
    assert_eq!(
        n.result.unwrap(),
        TraceSummary {
            processed: 9,
            malformed: 0,
            suppressed: 1,
        }
    );
}

#[test]
fn unrecognized_event_aborts_the_trace() {
    let mut input = stream(&[EventLine::started(0, "Deploy", "a")]);
    input.push_str("{\"time\":1,\"stage\":\"Deploy\",\"task\":\"a\",\"state\":\"paused\"}\n");
    input.push_str(&stream(&[EventLine::finished(2, "Deploy", "a")]));

    let n = common::narrate(&input);

    assert!(matches!(
        n.result,
        Err(TraceError::Unrecognized { line: 2, .. })
    ));
    assert_eq!(n.output, "\n  Started deploy > a");
}

#[test]
fn read_error_is_the_terminal_error() {
    let input = stream(&[
        EventLine::started(0, "Deploy", "a"),
        EventLine::finished(1, "Deploy", "a"),
    ]);
    let reader = FailingReader::new(input, io::ErrorKind::ConnectionReset);
    let mut out = Vec::new();

    let err = trace(&mut out, reader).unwrap_err();

    assert!(matches!(
        &err,
        TraceError::Read(e) if e.kind() == io::ErrorKind::ConnectionReset
    ));
    // Everything read before the failure was rendered; the trailer was not.
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\n  Started deploy > a. Done (00:00:01)"
    );
}

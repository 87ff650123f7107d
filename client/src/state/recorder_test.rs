use time::macros::datetime;

use super::*;

const NOW: OffsetDateTime = datetime!(2026-03-14 09:00:00 UTC);

#[test]
fn full_dictation_lifecycle() {
    let mut recorder = Recorder::new();
    assert_eq!(*recorder.state(), RecorderState::Idle);

    recorder.start(NOW);
    assert_eq!(*recorder.state(), RecorderState::Recording { started_at: NOW });

    let generation = recorder.stop().unwrap();
    assert_eq!(*recorder.state(), RecorderState::Transcribing);

    recorder.transcript_ready(generation, "Follow up with the registrar.".to_owned());
    assert_eq!(
        *recorder.state(),
        RecorderState::Done { transcript: "Follow up with the registrar.".to_owned() }
    );
}

#[test]
fn stop_while_idle_is_a_noop() {
    let mut recorder = Recorder::new();
    assert_eq!(recorder.stop(), None);
    assert_eq!(*recorder.state(), RecorderState::Idle);
}

#[test]
fn start_while_recording_is_a_noop() {
    let mut recorder = Recorder::new();
    recorder.start(NOW);
    let later = datetime!(2026-03-14 09:05:00 UTC);
    recorder.start(later);
    assert_eq!(*recorder.state(), RecorderState::Recording { started_at: NOW });
}

#[test]
fn a_transcript_after_reset_is_ignored() {
    let mut recorder = Recorder::new();
    recorder.start(NOW);
    let generation = recorder.stop().unwrap();

    recorder.reset();
    recorder.transcript_ready(generation, "too late".to_owned());
    assert_eq!(*recorder.state(), RecorderState::Idle);
}

#[test]
fn a_transcript_for_a_restarted_dictation_is_ignored() {
    let mut recorder = Recorder::new();
    recorder.start(NOW);
    let stale = recorder.stop().unwrap();

    recorder.reset();
    recorder.start(NOW);
    let current = recorder.stop().unwrap();
    assert_ne!(stale, current);

    recorder.transcript_ready(stale, "stale clip".to_owned());
    assert_eq!(*recorder.state(), RecorderState::Transcribing);

    recorder.transcript_ready(current, "current clip".to_owned());
    assert_eq!(
        *recorder.state(),
        RecorderState::Done { transcript: "current clip".to_owned() }
    );
}

#[test]
fn failures_surface_with_their_reason() {
    let mut recorder = Recorder::new();
    recorder.start(NOW);
    let generation = recorder.stop().unwrap();
    recorder.transcript_failed(generation, "endpoint unavailable".to_owned());
    assert_eq!(
        *recorder.state(),
        RecorderState::Failed { reason: "endpoint unavailable".to_owned() }
    );
}

#[test]
fn restarting_after_failure_begins_fresh() {
    let mut recorder = Recorder::new();
    recorder.start(NOW);
    let generation = recorder.stop().unwrap();
    recorder.transcript_failed(generation, "boom".to_owned());

    recorder.start(NOW);
    assert_eq!(*recorder.state(), RecorderState::Recording { started_at: NOW });
}

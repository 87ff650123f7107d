//! Audio-recorder state machine for dictated notes.
//!
//! DESIGN
//! ======
//! The capture device and the hosted transcription endpoint are external;
//! this module owns only the lifecycle: idle → recording → transcribing →
//! done/failed. Transcription completes via a single-shot result with no
//! cancellation support, so completions are tagged with a generation
//! counter — a transcript that arrives after the recorder was reset (or
//! restarted) carries a stale generation and is ignored, never mutating
//! state that has moved on.

#[cfg(test)]
#[path = "recorder_test.rs"]
mod recorder_test;

use time::OffsetDateTime;

/// Lifecycle of one dictation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecorderState {
    /// Nothing in flight (default).
    #[default]
    Idle,
    /// Audio is being captured.
    Recording {
        started_at: OffsetDateTime,
    },
    /// Clip handed off; waiting on the transcription endpoint.
    Transcribing,
    /// Transcript ready for the composer.
    Done {
        transcript: String,
    },
    Failed {
        reason: String,
    },
}

/// The recorder with generation-tagged completion.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    state: RecorderState,
    generation: u64,
}

impl Recorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> &RecorderState {
        &self.state
    }

    /// Start capturing. No-op while a dictation is already recording or
    /// transcribing; restarting from done/failed begins a fresh one.
    pub fn start(&mut self, now: OffsetDateTime) {
        match self.state {
            RecorderState::Recording { .. } | RecorderState::Transcribing => {}
            RecorderState::Idle | RecorderState::Done { .. } | RecorderState::Failed { .. } => {
                self.generation += 1;
                self.state = RecorderState::Recording { started_at: now };
            }
        }
    }

    /// Stop capturing and hand the clip to transcription. Returns the
    /// generation tag the caller must echo back with the result; `None`
    /// (no-op) unless currently recording.
    pub fn stop(&mut self) -> Option<u64> {
        if !matches!(self.state, RecorderState::Recording { .. }) {
            return None;
        }
        self.state = RecorderState::Transcribing;
        Some(self.generation)
    }

    /// Deliver a finished transcript for `generation`. Stale generations —
    /// the recorder was reset or restarted while the request was in flight —
    /// are ignored.
    pub fn transcript_ready(&mut self, generation: u64, transcript: String) {
        if generation == self.generation && self.state == RecorderState::Transcribing {
            self.state = RecorderState::Done { transcript };
        }
    }

    /// Deliver a transcription failure for `generation`. Stale generations
    /// are ignored.
    pub fn transcript_failed(&mut self, generation: u64, reason: String) {
        if generation == self.generation && self.state == RecorderState::Transcribing {
            self.state = RecorderState::Failed { reason };
        }
    }

    /// Abandon whatever is in flight and return to idle. Any late result is
    /// dropped by the generation check.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = RecorderState::Idle;
    }
}

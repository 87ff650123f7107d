//! Note composer state: text body, sketch attachment, transcript.
//!
//! The composer owns the drawing canvas session for its note. The host
//! forwards pointer/keyboard events to [`NoteComposer::sketch_mut`] and
//! feeds each returned [`Update`] back through
//! [`NoteComposer::apply_sketch_update`], which keeps the draft's attachment
//! in sync with the flattened canvas.

#[cfg(test)]
#[path = "notes_test.rs"]
mod notes_test;

use records::RecordId;
use records::note::NoteDraft;
use sketch::session::{Session, Update};

/// Composer for a new note on a case.
pub struct NoteComposer {
    case_id: RecordId,
    pub body: String,
    attachment: Option<String>,
    transcript: Option<String>,
    sketch: Session,
}

impl NoteComposer {
    /// Open a composer for `case_id` with a canvas of the given CSS-pixel
    /// size and device pixel ratio.
    #[must_use]
    pub fn new(case_id: RecordId, canvas_width: f64, canvas_height: f64, dpr: f64) -> Self {
        Self {
            case_id,
            body: String::new(),
            attachment: None,
            transcript: None,
            sketch: Session::new(canvas_width, canvas_height, dpr),
        }
    }

    /// The embedded canvas session; pointer and keyboard events go here.
    pub fn sketch_mut(&mut self) -> &mut Session {
        &mut self.sketch
    }

    /// The embedded canvas session, read-only.
    #[must_use]
    pub fn sketch(&self) -> &Session {
        &self.sketch
    }

    /// Fold a canvas update into the draft. `Update::Image(None)` (an empty
    /// or cleared canvas) drops the attachment.
    pub fn apply_sketch_update(&mut self, update: Update) {
        if let Update::Image(image) = update {
            self.attachment = image;
        }
    }

    /// Attach a transcript from the audio recorder.
    pub fn set_transcript(&mut self, text: String) {
        self.transcript = if text.trim().is_empty() { None } else { Some(text) };
    }

    /// Current attachment, if the canvas has committed content.
    #[must_use]
    pub fn attachment(&self) -> Option<&str> {
        self.attachment.as_deref()
    }

    /// A note is submittable once it carries a body, a drawing, or a
    /// transcript.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        !self.body.trim().is_empty() || self.attachment.is_some() || self.transcript.is_some()
    }

    /// Build the draft for submission. `None` until the note is submittable.
    #[must_use]
    pub fn draft(&self) -> Option<NoteDraft> {
        if !self.is_submittable() {
            return None;
        }
        Some(NoteDraft {
            case_id: self.case_id,
            body: self.body.trim().to_owned(),
            attachment: self.attachment.clone(),
            transcript: self.transcript.clone(),
        })
    }
}

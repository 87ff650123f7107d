//! Case notes with sketch and transcript attachments.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::RecordId;

/// A note as stored by the backend.
///
/// `attachment` is the opaque encoded-image string produced by the sketch
/// engine; the backend stores it verbatim and never interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub id: RecordId,
    pub case_id: RecordId,
    #[serde(default)]
    pub body: String,
    pub attachment: Option<String>,
    /// Transcript attached from the audio recorder.
    pub transcript: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

/// What the note composer submits; the backend assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub case_id: RecordId,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
}

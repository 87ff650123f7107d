//! Appointments, hearings, and the merged agenda.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::RecordId;

/// A client appointment at the firm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: RecordId,
    pub case_id: Option<RecordId>,
    pub contact_id: Option<RecordId>,
    #[serde(default)]
    pub subject: String,
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    #[serde(default)]
    pub location: String,
}

/// A listed court hearing for a case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hearing {
    pub id: RecordId,
    pub case_id: RecordId,
    #[serde(with = "time::serde::rfc3339")]
    pub starts_at: OffsetDateTime,
    /// Listing purpose ("Evidence", "Final arguments", …).
    #[serde(default)]
    pub purpose: String,
    #[serde(default)]
    pub court_room: String,
}

/// One row in the merged agenda.
#[derive(Debug, Clone, PartialEq)]
pub enum AgendaItem {
    Appointment(Appointment),
    Hearing(Hearing),
}

impl AgendaItem {
    /// When the item starts.
    #[must_use]
    pub fn starts_at(&self) -> OffsetDateTime {
        match self {
            Self::Appointment(a) => a.starts_at,
            Self::Hearing(h) => h.starts_at,
        }
    }

    /// The case the item belongs to, if any.
    #[must_use]
    pub fn case_id(&self) -> Option<RecordId> {
        match self {
            Self::Appointment(a) => a.case_id,
            Self::Hearing(h) => Some(h.case_id),
        }
    }

    /// Row label: an appointment's subject or a hearing's purpose.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Appointment(a) => &a.subject,
            Self::Hearing(h) => &h.purpose,
        }
    }

    fn id(&self) -> RecordId {
        match self {
            Self::Appointment(a) => a.id,
            Self::Hearing(h) => h.id,
        }
    }
}

/// Merge appointments and hearings into one agenda, ordered by start time
/// (ties broken by id so ordering is deterministic).
#[must_use]
pub fn merge_agenda(appointments: &[Appointment], hearings: &[Hearing]) -> Vec<AgendaItem> {
    let mut agenda: Vec<AgendaItem> = appointments
        .iter()
        .cloned()
        .map(AgendaItem::Appointment)
        .chain(hearings.iter().cloned().map(AgendaItem::Hearing))
        .collect();
    agenda.sort_by(|a, b| {
        a.starts_at()
            .cmp(&b.starts_at())
            .then_with(|| a.id().cmp(&b.id()))
    });
    agenda
}

//! Shared entity model for the caseboard dashboard.
//!
//! Record structs mirror the backend's relational rows. The backend is
//! loosely typed at the edges — optional columns, open-ended JSON bags,
//! status strings this client may not know — so every record type here
//! tolerates absent and unknown fields and performs its defaulting in one
//! place, at this boundary, instead of scattering fallbacks through
//! presentation code.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`case`] | Cases and the typed accessor over their details bag |
//! | [`contact`] | Clients of the firm |
//! | [`note`] | Case notes with sketch/transcript attachments |
//! | [`task`] | Tasks and due-date bucketing |
//! | [`schedule`] | Appointments, hearings, and the merged agenda |
//! | [`court`] | Court-registry identifiers and third-party payloads |
//! | [`dates`] | Date parsing and window helpers |

pub mod case;
pub mod contact;
pub mod court;
pub mod dates;
pub mod note;
pub mod schedule;
pub mod task;

use uuid::Uuid;

/// Unique identifier for any caseboard record.
pub type RecordId = Uuid;

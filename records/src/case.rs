//! Case records and the typed accessor over their open-ended details bag.

#[cfg(test)]
#[path = "case_test.rs"]
mod case_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::Date;

use crate::RecordId;
use crate::court::Cnr;

/// Lifecycle status of a case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Actively worked (default).
    #[default]
    Open,
    /// Paused — awaiting the client, a court date, or an external party.
    OnHold,
    /// Concluded; kept for reference.
    Closed,
    /// Any status string the backend sends that this client doesn't know.
    #[serde(other)]
    Unknown,
}

/// A case as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseRecord {
    pub id: RecordId,
    /// Firm-internal case number, e.g. `"2026/118"`.
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub title: String,
    /// The firm client this case is for, once linked.
    pub client_id: Option<RecordId>,
    #[serde(default)]
    pub status: CaseStatus,
    /// Free-form procedural stage label ("Evidence", "Arguments", …).
    #[serde(default)]
    pub stage: String,
    #[serde(default)]
    pub court: String,
    /// Court-registry number, when the case is linked to the registry.
    pub cnr: Option<Cnr>,
    pub next_hearing_on: Option<Date>,
    pub opened_on: Option<Date>,
    /// Open-ended extras (judge, acts, filing number, parties, …). Read via
    /// [`CaseRecord::details`].
    #[serde(default)]
    pub details: Value,
    /// Monotonically increasing edit counter used for conflict detection.
    #[serde(default)]
    pub version: i64,
}

impl CaseRecord {
    /// Typed, defaulting view over the details bag.
    #[must_use]
    pub fn details(&self) -> CaseDetails<'_> {
        CaseDetails { value: &self.details }
    }

    /// List/heading label: number and title with sensible fallbacks.
    #[must_use]
    pub fn heading(&self) -> String {
        match (self.number.is_empty(), self.title.is_empty()) {
            (false, false) => format!("{} — {}", self.number, self.title),
            (false, true) => self.number.clone(),
            (true, false) => self.title.clone(),
            (true, true) => "Untitled case".to_owned(),
        }
    }
}

/// Typed access to common `details` fields. Defaults live here, at the data
/// boundary, not in presentation code.
pub struct CaseDetails<'a> {
    value: &'a Value,
}

impl CaseDetails<'_> {
    fn text(&self, key: &str) -> &str {
        self.value.get(key).and_then(|v| v.as_str()).unwrap_or("")
    }

    /// Presiding judge. Empty when absent.
    #[must_use]
    pub fn judge(&self) -> &str {
        self.text("judge")
    }

    /// Acts and sections cited. Empty when absent.
    #[must_use]
    pub fn acts(&self) -> &str {
        self.text("acts")
    }

    /// Court filing number. Empty when absent.
    #[must_use]
    pub fn filing_number(&self) -> &str {
        self.text("filing_number")
    }

    /// Petitioner name(s). Empty when absent.
    #[must_use]
    pub fn petitioner(&self) -> &str {
        self.text("petitioner")
    }

    /// Respondent name(s). Empty when absent.
    #[must_use]
    pub fn respondent(&self) -> &str {
        self.text("respondent")
    }
}

/// What a case-creation form submits; the backend assigns id and version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseDraft {
    pub number: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<RecordId>,
    pub status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnr: Option<Cnr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened_on: Option<Date>,
}

/// Sparse update for a case. Only present fields are applied by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_hearing_on: Option<Date>,
    /// Details keys to merge (null values delete keys).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

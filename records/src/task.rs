//! Tasks and due-date bucketing.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use serde::{Deserialize, Serialize};
use time::Date;

use crate::RecordId;

/// A task as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: RecordId,
    /// Tasks may be firm-wide rather than tied to one case.
    pub case_id: Option<RecordId>,
    #[serde(default)]
    pub title: String,
    pub due_on: Option<Date>,
    #[serde(default)]
    pub done: bool,
}

/// Scheduling bucket of a task relative to an explicit "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBucket {
    Overdue,
    DueToday,
    Upcoming,
    Unscheduled,
}

impl TaskRecord {
    /// Which bucket this task falls in as of `today`.
    #[must_use]
    pub fn due_bucket(&self, today: Date) -> DueBucket {
        match self.due_on {
            None => DueBucket::Unscheduled,
            Some(due) if due < today => DueBucket::Overdue,
            Some(due) if due == today => DueBucket::DueToday,
            Some(_) => DueBucket::Upcoming,
        }
    }
}

/// What a task form submits; the backend assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_id: Option<RecordId>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_on: Option<Date>,
}

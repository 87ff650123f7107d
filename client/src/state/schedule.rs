//! Agenda page state: merged appointments and hearings, upcoming windows.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use records::RecordId;
use records::dates::within_days;
use records::schedule::{AgendaItem, Appointment, Hearing, merge_agenda};
use time::OffsetDateTime;

/// Agenda view state.
#[derive(Debug, Clone, Default)]
pub struct ScheduleState {
    pub appointments: Vec<Appointment>,
    pub hearings: Vec<Hearing>,
    pub loading: bool,
}

impl ScheduleState {
    /// Agenda entries starting within `[now, now + days)`, in start order.
    #[must_use]
    pub fn upcoming(&self, now: OffsetDateTime, days: i64) -> Vec<AgendaItem> {
        merge_agenda(&self.appointments, &self.hearings)
            .into_iter()
            .filter(|item| within_days(now, item.starts_at(), days))
            .collect()
    }

    /// The next listed hearing for `case_id` at or after `now`.
    #[must_use]
    pub fn next_hearing(&self, case_id: RecordId, now: OffsetDateTime) -> Option<&Hearing> {
        self.hearings
            .iter()
            .filter(|hearing| hearing.case_id == case_id && hearing.starts_at >= now)
            .min_by_key(|hearing| hearing.starts_at)
    }
}

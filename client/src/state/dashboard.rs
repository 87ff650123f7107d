//! Landing-page summary counters.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use records::case::{CaseRecord, CaseStatus};
use records::dates::within_days;
use records::schedule::Hearing;
use records::task::{DueBucket, TaskRecord};
use time::OffsetDateTime;

/// Headline numbers for the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub open_cases: usize,
    pub tasks_overdue: usize,
    pub tasks_due_today: usize,
    pub hearings_this_week: usize,
}

/// Compute the dashboard summary as of `now`.
#[must_use]
pub fn summarize(
    cases: &[CaseRecord],
    tasks: &[TaskRecord],
    hearings: &[Hearing],
    now: OffsetDateTime,
) -> Summary {
    let today = now.date();
    let mut summary = Summary {
        open_cases: cases.iter().filter(|c| c.status == CaseStatus::Open).count(),
        ..Summary::default()
    };
    for task in tasks.iter().filter(|t| !t.done) {
        match task.due_bucket(today) {
            DueBucket::Overdue => summary.tasks_overdue += 1,
            DueBucket::DueToday => summary.tasks_due_today += 1,
            DueBucket::Upcoming | DueBucket::Unscheduled => {}
        }
    }
    summary.hearings_this_week = hearings
        .iter()
        .filter(|h| within_days(now, h.starts_at, 7))
        .count();
    summary
}

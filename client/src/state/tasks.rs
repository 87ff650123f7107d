//! Task-list page state: due-date bucketing and badge counters.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use records::task::{DueBucket, TaskRecord};
use time::Date;

/// Task-list view state.
#[derive(Debug, Clone, Default)]
pub struct TasksState {
    pub items: Vec<TaskRecord>,
    pub loading: bool,
}

impl TasksState {
    /// Open tasks in `bucket` as of `today`, ordered by due date then title.
    #[must_use]
    pub fn in_bucket(&self, bucket: DueBucket, today: Date) -> Vec<&TaskRecord> {
        let mut rows: Vec<&TaskRecord> = self
            .items
            .iter()
            .filter(|task| !task.done && task.due_bucket(today) == bucket)
            .collect();
        rows.sort_by(|a, b| {
            a.due_on
                .cmp(&b.due_on)
                .then_with(|| a.title.cmp(&b.title))
                .then_with(|| a.id.cmp(&b.id))
        });
        rows
    }

    /// `(overdue, due_today)` badge counts for the page header. Done tasks
    /// never count.
    #[must_use]
    pub fn badge_counts(&self, today: Date) -> (usize, usize) {
        let mut overdue = 0;
        let mut due_today = 0;
        for task in self.items.iter().filter(|task| !task.done) {
            match task.due_bucket(today) {
                DueBucket::Overdue => overdue += 1,
                DueBucket::DueToday => due_today += 1,
                DueBucket::Upcoming | DueBucket::Unscheduled => {}
            }
        }
        (overdue, due_today)
    }
}

//! Case-list page state: search, status filter, ordering.

#[cfg(test)]
#[path = "cases_test.rs"]
mod cases_test;

use records::case::{CaseRecord, CaseStatus};

/// Case-list view state.
#[derive(Debug, Clone, Default)]
pub struct CasesState {
    pub items: Vec<CaseRecord>,
    /// Live search text; matched case-insensitively against number, title,
    /// and registry number.
    pub search: String,
    pub status_filter: Option<CaseStatus>,
    pub loading: bool,
}

impl CasesState {
    /// Rows visible under the current search and filter, ordered by case
    /// number (ties broken by id so ordering is stable).
    #[must_use]
    pub fn visible(&self) -> Vec<&CaseRecord> {
        let needle = self.search.trim().to_lowercase();
        let mut rows: Vec<&CaseRecord> = self
            .items
            .iter()
            .filter(|case| self.status_filter.is_none_or(|wanted| case.status == wanted))
            .filter(|case| needle.is_empty() || matches_search(case, &needle))
            .collect();
        rows.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.id.cmp(&b.id)));
        rows
    }

    /// Count shown next to the status filter chips.
    #[must_use]
    pub fn count_with_status(&self, status: CaseStatus) -> usize {
        self.items.iter().filter(|case| case.status == status).count()
    }
}

/// Case-insensitive substring match over number, title, and registry number.
fn matches_search(case: &CaseRecord, needle: &str) -> bool {
    case.number.to_lowercase().contains(needle)
        || case.title.to_lowercase().contains(needle)
        || case
            .cnr
            .as_ref()
            .is_some_and(|cnr| cnr.as_str().to_lowercase().contains(needle))
}

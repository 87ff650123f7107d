//! Cached queries and invalidating mutations.
//!
//! DESIGN
//! ======
//! Queries go through [`cached`]: fresh cache hits are served directly,
//! misses fetch and fill, and stale entries refetch — falling back to the
//! stale value when the refetch fails, since the page already rendered that
//! data once. Mutations go through [`mutate`]: on success they invalidate
//! their declared key prefixes and hand the created/updated record back to
//! the caller, which dispatches its own UI update. Nothing here registers
//! callbacks.

#[cfg(test)]
#[path = "ops_test.rs"]
mod ops_test;

use std::future::Future;
use std::time::Instant;

use records::RecordId;
use records::case::{CaseDraft, CaseRecord, CaseUpdate};
use records::contact::ContactRecord;
use records::court::{Cnr, CourtRecord};
use records::note::{NoteDraft, NoteRecord};
use records::schedule::{Appointment, Hearing};
use records::task::{TaskDraft, TaskRecord};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::cache::{Cache, Lookup, QueryKey};
use crate::net::api::{Api, ApiError};

// =============================================================================
// CACHE KEYS
// =============================================================================

/// Key for the case list.
#[must_use]
pub fn cases_key() -> QueryKey {
    QueryKey::new(["cases"])
}

/// Key for one case.
#[must_use]
pub fn case_key(id: RecordId) -> QueryKey {
    QueryKey::new(["cases".to_owned(), id.to_string()])
}

/// Key for one case's notes.
#[must_use]
pub fn case_notes_key(case_id: RecordId) -> QueryKey {
    QueryKey::new(["cases".to_owned(), case_id.to_string(), "notes".to_owned()])
}

/// Key for the task list.
#[must_use]
pub fn tasks_key() -> QueryKey {
    QueryKey::new(["tasks"])
}

/// Key for the appointment list.
#[must_use]
pub fn appointments_key() -> QueryKey {
    QueryKey::new(["appointments"])
}

/// Key for the hearing list.
#[must_use]
pub fn hearings_key() -> QueryKey {
    QueryKey::new(["hearings"])
}

/// Key for the contact list.
#[must_use]
pub fn contacts_key() -> QueryKey {
    QueryKey::new(["contacts"])
}

/// Key for one registry number's court data.
#[must_use]
pub fn court_key(cnr: &Cnr) -> QueryKey {
    QueryKey::new(["court".to_owned(), cnr.as_str().to_owned()])
}

// =============================================================================
// GENERIC QUERY / MUTATION
// =============================================================================

/// Run a query through the cache.
///
/// # Errors
///
/// Returns the fetch error on a miss, or a decode error if a cached value no
/// longer matches the expected shape.
pub async fn cached<T, F, Fut>(
    cache: &mut Cache,
    key: QueryKey,
    now: Instant,
    fetch: F,
) -> Result<T, ApiError>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    match cache.lookup(&key, now) {
        Lookup::Fresh(value) => Ok(serde_json::from_value(value)?),
        Lookup::Stale(stale) => match fetch().await {
            Ok(value) => {
                cache.put(key, serde_json::to_value(&value)?, now);
                Ok(value)
            }
            Err(err) => {
                warn!(key = %key, error = %err, "refetch failed; serving stale");
                Ok(serde_json::from_value(stale)?)
            }
        },
        Lookup::Miss => {
            let value = fetch().await?;
            cache.put(key, serde_json::to_value(&value)?, now);
            Ok(value)
        }
    }
}

/// Run a mutation; on success, invalidate the listed key prefixes.
///
/// # Errors
///
/// Returns the send error unchanged. Nothing is invalidated on failure.
pub async fn mutate<T, F, Fut>(
    cache: &mut Cache,
    invalidates: &[QueryKey],
    send: F,
) -> Result<T, ApiError>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let value = send().await?;
    for key in invalidates {
        cache.invalidate(key);
    }
    Ok(value)
}

// =============================================================================
// QUERIES
// =============================================================================

/// The case list, cached under `cases`.
///
/// # Errors
///
/// Returns [`ApiError`] when the backend is unreachable and nothing usable
/// is cached — as do all operations below.
pub async fn fetch_cases(
    api: &Api,
    cache: &mut Cache,
    now: Instant,
) -> Result<Vec<CaseRecord>, ApiError> {
    cached(cache, cases_key(), now, || api.list_cases()).await
}

/// One case, cached under `cases/{id}`.
pub async fn fetch_case(
    api: &Api,
    cache: &mut Cache,
    id: RecordId,
    now: Instant,
) -> Result<CaseRecord, ApiError> {
    cached(cache, case_key(id), now, || api.get_case(id)).await
}

/// One case's notes, cached under `cases/{id}/notes`.
pub async fn fetch_notes(
    api: &Api,
    cache: &mut Cache,
    case_id: RecordId,
    now: Instant,
) -> Result<Vec<NoteRecord>, ApiError> {
    cached(cache, case_notes_key(case_id), now, || api.list_notes(case_id)).await
}

/// The task list, cached under `tasks`.
pub async fn fetch_tasks(
    api: &Api,
    cache: &mut Cache,
    now: Instant,
) -> Result<Vec<TaskRecord>, ApiError> {
    cached(cache, tasks_key(), now, || api.list_tasks()).await
}

/// Appointments, cached under `appointments`.
pub async fn fetch_appointments(
    api: &Api,
    cache: &mut Cache,
    now: Instant,
) -> Result<Vec<Appointment>, ApiError> {
    cached(cache, appointments_key(), now, || api.list_appointments()).await
}

/// Hearings, cached under `hearings`.
pub async fn fetch_hearings(
    api: &Api,
    cache: &mut Cache,
    now: Instant,
) -> Result<Vec<Hearing>, ApiError> {
    cached(cache, hearings_key(), now, || api.list_hearings()).await
}

/// The firm's clients, cached under `contacts`.
pub async fn fetch_contacts(
    api: &Api,
    cache: &mut Cache,
    now: Instant,
) -> Result<Vec<ContactRecord>, ApiError> {
    cached(cache, contacts_key(), now, || api.list_contacts()).await
}

/// Third-party court data for a registry number, cached under
/// `court/{cnr}`.
pub async fn fetch_court_record(
    api: &Api,
    cache: &mut Cache,
    cnr: &Cnr,
    now: Instant,
) -> Result<CourtRecord, ApiError> {
    cached(cache, court_key(cnr), now, || api.court_lookup(cnr)).await
}

// =============================================================================
// MUTATIONS
// =============================================================================

/// Create a case; invalidates the case list.
pub async fn create_case(
    api: &Api,
    cache: &mut Cache,
    draft: &CaseDraft,
) -> Result<CaseRecord, ApiError> {
    mutate(cache, &[cases_key()], || api.create_case(draft)).await
}

/// Update a case; invalidates the whole `cases` subtree (the list, the case,
/// and its notes — prefix invalidation is deliberately coarse).
pub async fn update_case(
    api: &Api,
    cache: &mut Cache,
    id: RecordId,
    update: &CaseUpdate,
) -> Result<CaseRecord, ApiError> {
    mutate(cache, &[cases_key()], || api.update_case(id, update)).await
}

/// Create a note; invalidates the owning case's notes.
pub async fn create_note(
    api: &Api,
    cache: &mut Cache,
    draft: &NoteDraft,
) -> Result<NoteRecord, ApiError> {
    mutate(cache, &[case_notes_key(draft.case_id)], || api.create_note(draft)).await
}

/// Create a task; invalidates the task list.
pub async fn create_task(
    api: &Api,
    cache: &mut Cache,
    draft: &TaskDraft,
) -> Result<TaskRecord, ApiError> {
    mutate(cache, &[tasks_key()], || api.create_task(draft)).await
}

/// Toggle a task's done flag; invalidates the task list.
pub async fn set_task_done(
    api: &Api,
    cache: &mut Cache,
    id: RecordId,
    done: bool,
) -> Result<TaskRecord, ApiError> {
    mutate(cache, &[tasks_key()], || api.set_task_done(id, done)).await
}

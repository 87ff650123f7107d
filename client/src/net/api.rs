//! HTTP data access against the hosted backend.
//!
//! The backend, authentication, file storage, and the court-data provider
//! are external collaborators; this module is the dashboard's only transport
//! to them. One method per endpoint, each returning
//! `Result<T, `[`ApiError`]`>` — callers dispatch UI updates from the
//! explicit result, there is no callback registration.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies are distinct
//! variants so pages can degrade differently (retry banner vs. sign-in
//! prompt vs. bug report).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::RecordId;
use records::case::{CaseDraft, CaseRecord, CaseUpdate};
use records::contact::ContactRecord;
use records::court::{Cnr, CourtRecord};
use records::note::{NoteDraft, NoteRecord};
use records::schedule::{Appointment, Hearing};
use records::task::{TaskDraft, TaskRecord};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Error returned by every [`Api`] method.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (DNS, TLS, connection reset, timeout).
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("backend returned {status} for {path}")]
    Status { status: StatusCode, path: String },
    /// The body was not the JSON shape this client expects.
    #[error("invalid JSON payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Handle to the hosted backend's REST surface.
#[derive(Debug, Clone)]
pub struct Api {
    base_url: String,
    bearer_token: Option<String>,
    http: reqwest::Client,
}

impl Api {
    /// Create a handle. `base_url` may carry a trailing slash or not.
    #[must_use]
    pub fn new(base_url: impl Into<String>, bearer_token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url, bearer_token, http: reqwest::Client::new() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn decode<T: DeserializeOwned>(
        resp: reqwest::Response,
        path: &str,
    ) -> Result<T, ApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { status, path: path.to_owned() });
        }
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        debug!(path, "GET");
        let resp = self.authorize(self.http.get(self.url(path))).send().await?;
        Self::decode(resp, path).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let resp = self
            .authorize(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        Self::decode(resp, path).await
    }

    async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PATCH");
        let resp = self
            .authorize(self.http.patch(self.url(path)).json(body))
            .send()
            .await?;
        Self::decode(resp, path).await
    }

    // --- Cases ---

    /// List every case visible to this user.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or decode failure — as do
    /// all methods below.
    pub async fn list_cases(&self) -> Result<Vec<CaseRecord>, ApiError> {
        self.get_json("api/cases").await
    }

    /// Fetch one case.
    pub async fn get_case(&self, id: RecordId) -> Result<CaseRecord, ApiError> {
        self.get_json(&format!("api/cases/{id}")).await
    }

    /// Create a case.
    pub async fn create_case(&self, draft: &CaseDraft) -> Result<CaseRecord, ApiError> {
        self.post_json("api/cases", draft).await
    }

    /// Apply a sparse update to a case.
    pub async fn update_case(
        &self,
        id: RecordId,
        update: &CaseUpdate,
    ) -> Result<CaseRecord, ApiError> {
        self.patch_json(&format!("api/cases/{id}"), update).await
    }

    // --- Notes ---

    /// List the notes on a case, newest first.
    pub async fn list_notes(&self, case_id: RecordId) -> Result<Vec<NoteRecord>, ApiError> {
        self.get_json(&format!("api/cases/{case_id}/notes")).await
    }

    /// Create a note from a composer draft.
    pub async fn create_note(&self, draft: &NoteDraft) -> Result<NoteRecord, ApiError> {
        self.post_json(&format!("api/cases/{}/notes", draft.case_id), draft)
            .await
    }

    // --- Tasks ---

    /// List every open and recently closed task.
    pub async fn list_tasks(&self) -> Result<Vec<TaskRecord>, ApiError> {
        self.get_json("api/tasks").await
    }

    /// Create a task.
    pub async fn create_task(&self, draft: &TaskDraft) -> Result<TaskRecord, ApiError> {
        self.post_json("api/tasks", draft).await
    }

    /// Mark a task done or not done.
    pub async fn set_task_done(&self, id: RecordId, done: bool) -> Result<TaskRecord, ApiError> {
        self.patch_json(&format!("api/tasks/{id}"), &serde_json::json!({ "done": done }))
            .await
    }

    // --- Schedule ---

    /// List appointments.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ApiError> {
        self.get_json("api/appointments").await
    }

    /// List hearings.
    pub async fn list_hearings(&self) -> Result<Vec<Hearing>, ApiError> {
        self.get_json("api/hearings").await
    }

    // --- Contacts ---

    /// List the firm's clients.
    pub async fn list_contacts(&self) -> Result<Vec<ContactRecord>, ApiError> {
        self.get_json("api/contacts").await
    }

    // --- Integrations ---

    /// Look up third-party court data for a registry number.
    pub async fn court_lookup(&self, cnr: &Cnr) -> Result<CourtRecord, ApiError> {
        self.get_json(&format!("api/court/{cnr}")).await
    }

    /// Submit a recorded audio clip for transcription; returns the text.
    pub async fn transcribe(&self, audio: Vec<u8>) -> Result<String, ApiError> {
        #[derive(serde::Deserialize)]
        struct TranscriptResponse {
            text: String,
        }
        let path = "api/transcribe";
        debug!(path, bytes = audio.len(), "POST");
        let resp = self
            .authorize(
                self.http
                    .post(self.url(path))
                    .header(CONTENT_TYPE, "application/octet-stream")
                    .body(audio),
            )
            .send()
            .await?;
        let body: TranscriptResponse = Self::decode(resp, path).await?;
        Ok(body.text)
    }
}

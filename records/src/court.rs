//! Court-registry identifiers and the third-party lookup payload.
//!
//! The court-data provider itself is an external collaborator; this module
//! owns only what the dashboard needs from it: a validated registry number
//! and a tolerant view over the payload it returns.

#[cfg(test)]
#[path = "court_test.rs"]
mod court_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::Date;

use crate::dates;

/// Error returned by [`Cnr::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CnrError {
    /// Wrong length — a registry number is exactly 16 characters.
    #[error("cnr must be 16 characters, got {0}")]
    Length(usize),
    /// A character outside `[A-Za-z0-9]`.
    #[error("cnr may contain only letters and digits, found {0:?}")]
    Charset(char),
}

/// A 16-character court-registry record number.
///
/// Stored uppercase; parsing trims whitespace, normalizes case, and rejects
/// anything that is not exactly 16 ASCII alphanumerics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnr(String);

impl Cnr {
    /// Parse and normalize a registry number.
    ///
    /// # Errors
    ///
    /// Returns [`CnrError`] for wrong length or invalid characters.
    pub fn parse(raw: &str) -> Result<Self, CnrError> {
        let trimmed = raw.trim();
        let count = trimmed.chars().count();
        if count != 16 {
            return Err(CnrError::Length(count));
        }
        let mut normalized = String::with_capacity(16);
        for ch in trimmed.chars() {
            if !ch.is_ascii_alphanumeric() {
                return Err(CnrError::Charset(ch));
            }
            normalized.push(ch.to_ascii_uppercase());
        }
        Ok(Self(normalized))
    }

    /// The normalized registry number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cnr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Cnr {
    type Error = CnrError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<Cnr> for String {
    fn from(cnr: Cnr) -> Self {
        cnr.0
    }
}

/// Third-party court data for one registry number, as returned by the
/// integration endpoint.
///
/// Everything beyond the registry number is provider-shaped and open-ended;
/// read it through [`CourtRecord::fields`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourtRecord {
    pub cnr: Cnr,
    #[serde(flatten)]
    pub extra: Value,
}

impl CourtRecord {
    /// Typed, defaulting view over the provider payload.
    #[must_use]
    pub fn fields(&self) -> CourtFields<'_> {
        CourtFields { value: &self.extra }
    }
}

/// Typed access to common provider fields. Every accessor defaults here so
/// presentation code never has to.
pub struct CourtFields<'a> {
    value: &'a Value,
}

impl CourtFields<'_> {
    fn text(&self, key: &str) -> &str {
        self.value.get(key).and_then(|v| v.as_str()).unwrap_or("")
    }

    /// Registry-side case status label. Empty when absent.
    #[must_use]
    pub fn status(&self) -> &str {
        self.text("case_status")
    }

    /// Court name. Empty when absent.
    #[must_use]
    pub fn court_name(&self) -> &str {
        self.text("court_name")
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

    /// Next listing date, when the provider sent a parseable one.
    #[must_use]
    pub fn next_listing_on(&self) -> Option<Date> {
        dates::parse_date(self.text("next_listing_on"))
    }
}

//! Clients of the firm.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

use crate::RecordId;

/// A client as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default)]
    pub address: String,
}

impl ContactRecord {
    /// Display name with a fallback for unnamed imports.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { "Unnamed client" } else { &self.name }
    }

    /// Primary phone number. Empty when none recorded.
    #[must_use]
    pub fn primary_phone(&self) -> &str {
        self.phones.first().map_or("", String::as_str)
    }

    /// Primary email address. Empty when none recorded.
    #[must_use]
    pub fn primary_email(&self) -> &str {
        self.emails.first().map_or("", String::as_str)
    }
}

//! Shared DTOs for the persisted session record and the chat endpoint.
//!
//! DESIGN
//! ======
//! `User` is both the in-memory identity and the `localStorage` record, so
//! its serde shape (camelCase `profilePicture`) is the persistence format.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as stored under the session storage key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Generated identifier (`user-` followed by a random token).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address the session was opened with.
    pub email: String,
    /// Avatar image URL.
    #[serde(default)]
    pub profile_picture: String,
}

impl User {
    /// Whether a decoded record is usable as a session identity.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.id.trim().is_empty() && !self.name.trim().is_empty() && self.email.contains('@')
    }
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
}

/// Successful reply from `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Error body returned by the chat endpoint for rejected requests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatErrorBody {
    pub error: String,
}

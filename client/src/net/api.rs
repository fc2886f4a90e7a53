//! REST helpers for the companion chat endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since the chat
//! flow only runs in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a typed `ApiError` instead of panics; the chat view turns any
//! failure into a toast plus a fallback assistant message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use super::types::ChatRequest;

/// Path of the companion chat endpoint served alongside the app.
pub const CHAT_ENDPOINT: &str = "/api/chat";

/// Failures reaching the chat backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("chat request failed: {status}")]
    Status { status: u16 },

    /// The response body was not the expected JSON shape.
    #[error("invalid response: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_request_body(message: &str, thread_id: Option<&str>) -> ChatRequest {
    ChatRequest {
        message: message.to_owned(),
        thread_id: thread_id.map(str::to_owned),
    }
}

/// Send one user message to `POST /api/chat` and return the assistant reply.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the backend rejects it, or
/// the body cannot be decoded.
pub async fn send_chat_message(message: &str, thread_id: Option<&str>) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = chat_request_body(message, thread_id);
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        let body: super::types::ChatResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.response)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, thread_id);
        Err(ApiError::Unavailable)
    }
}

//! Companion chat endpoint.
//!
//! ERROR HANDLING
//! ==============
//! Only a missing or blank message is rejected (400). Reply policy failures
//! never fail the request: they are logged and answered with a fixed
//! apology so the conversation can continue.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use client::net::types::{ChatErrorBody, ChatResponse};
use serde::Deserialize;

use crate::services::companion::CompanionError;
use crate::services::memory::Speaker;
use crate::state::AppState;

pub const NO_MESSAGE_ERROR: &str = "No message provided";
pub const FILTERED_REPLY: &str = "I'm sorry, I cannot help with that.";
pub const FAILED_REPLY: &str = "An error occurred. Please try again.";

/// Lenient request body: absent fields map to the 400 path instead of a
/// deserialization rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub thread_id: Option<String>,
}

pub type ChatResult = Result<Json<ChatResponse>, (StatusCode, Json<ChatErrorBody>)>;

/// `POST /api/chat`
pub async fn chat(State(state): State<AppState>, body: Result<Json<ChatBody>, JsonRejection>) -> ChatResult {
    let body = body.map(|Json(b)| b).unwrap_or_else(|rejection| {
        tracing::debug!(error = %rejection, "unreadable chat body");
        ChatBody::default()
    });

    let Some(message) = body.message.filter(|m| !m.trim().is_empty()) else {
        return Err((StatusCode::BAD_REQUEST, Json(ChatErrorBody { error: NO_MESSAGE_ERROR.to_owned() })));
    };
    let thread_id = body
        .thread_id
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| state.config.default_thread.clone());

    Ok(Json(ChatResponse { response: respond(&state, &thread_id, &message).await }))
}

async fn respond(state: &AppState, thread_id: &str, message: &str) -> String {
    state.memory.store(thread_id, Speaker::User, message).await;
    let summary = state.memory.summary(thread_id, state.config.summary_turns).await;
    tracing::debug!(thread = %thread_id, turns = summary.user_turns, context = %summary.render(), "chat context");

    match state.policy.reply(message, &summary).await {
        Ok(reply) => {
            tracing::info!(thread = %thread_id, role = reply.role.name(), "companion reply");
            state.memory.store(thread_id, Speaker::Assistant, &reply.text).await;
            reply.text
        }
        Err(CompanionError::ContentFiltered(reason)) => {
            tracing::warn!(thread = %thread_id, %reason, "chat message filtered");
            FILTERED_REPLY.to_owned()
        }
        Err(e) => {
            tracing::error!(thread = %thread_id, error = %e, "companion reply failed");
            FAILED_REPLY.to_owned()
        }
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

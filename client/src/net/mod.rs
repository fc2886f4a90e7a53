//! Networking modules for the chat HTTP endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` defines the shared wire and
//! persistence schema.

pub mod api;
pub mod types;

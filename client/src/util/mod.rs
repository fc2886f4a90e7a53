//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod auth;
pub mod chart;
pub mod clock;
pub mod dark_mode;
pub mod delay;
pub mod routes;
pub mod speech;
pub mod storage;
pub mod validate;

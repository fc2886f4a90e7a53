//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod exercises;
pub mod home;
pub mod journal;
pub mod not_found;
pub mod profile;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`, `journal`, etc.) so individual
//! components can depend on small focused models.

pub mod chat;
pub mod journal;
pub mod session;
pub mod toast;
pub mod ui;

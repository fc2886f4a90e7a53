//! Chat services behind the HTTP routes.

pub mod companion;
pub mod memory;

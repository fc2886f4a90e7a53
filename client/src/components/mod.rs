//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render layout chrome and feature widgets while reading/writing
//! shared state from Leptos context providers.

pub mod app_layout;
pub mod chat_interface;
pub mod footer;
pub mod homepage_layout;
pub mod line_chart;
pub mod main_nav;
pub mod nav_bar;
pub mod route_guard;
pub mod theme_toggle;
pub mod therapist_connect;
pub mod toaster;
pub mod user_menu;

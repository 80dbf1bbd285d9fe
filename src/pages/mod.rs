//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (context lookup, submit
//! handlers, redirects) and delegates rendering details to `components`.
//! Validation and state transitions live in `forms` and `state` so they can
//! be unit tested without a reactive runtime.

pub mod auth_pages;
pub mod chats;
pub mod home;
pub mod investor_profile;
pub mod investor_register;
pub mod matches;
pub mod news_feed;
pub mod not_found;
pub mod notifications;
pub mod portfolio;
pub mod profile_edit;
pub mod search;

//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule is a plain struct held in an `RwSignal` and provided as
//! Leptos context by `app::App`. None of them touch the DOM, so every
//! transition is unit-tested natively.

pub mod auth;
pub mod chat;
pub mod news_feed;
pub mod notifications;
pub mod portfolio;
pub mod search;

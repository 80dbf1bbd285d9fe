//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write shared state through Leptos context; pages
//! compose them and own routing decisions.

pub mod chat_panel;
pub mod conversation_list;
pub mod form_field;
pub mod layout;
pub mod opportunity_card;

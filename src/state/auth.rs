//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The async side (backend call,
//! token persistence) lives in `net::auth`; this struct only records the
//! outcome.
//!
//! DESIGN
//! ======
//! "Authenticated" is derived from `user` rather than stored, so the two can
//! never disagree.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    /// True while a login, logout or session restore is in flight.
    pub loading: bool,
}

impl AuthState {
    /// State at startup, before the persisted token has been checked.
    pub fn restoring() -> Self {
        Self { user: None, loading: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }

    pub fn apply_login(&mut self, user: User) {
        log::debug!("auth state: signed in as {}", user.id);
        self.user = Some(user);
        self.loading = false;
    }

    pub fn apply_logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::debug!("auth state: signed out {}", user.id);
        }
        self.loading = false;
    }

    /// Record the result of checking the persisted token.
    pub fn apply_restore(&mut self, user: Option<User>) {
        match user {
            Some(user) => self.apply_login(user),
            None => self.apply_logout(),
        }
    }
}

//! Authentication backend and token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthService` is built once in the composition root (`app::App`) and
//! shared through Leptos context. Pages call it from event handlers and apply
//! the outcome to `state::auth::AuthState`.
//!
//! DESIGN
//! ======
//! Both I/O seams are traits so a real backend can replace the mock without
//! touching pages: `AuthBackend` for credential checks, `TokenStore` for the
//! persisted token. Every outcome is an explicit `Result`, including the
//! mock's, so the failure path exists before a backend does.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::types::{Credentials, Session, User};
use crate::util::storage::{self, StorageError};

/// `localStorage` key holding the opaque auth token.
pub const TOKEN_STORAGE_KEY: &str = "authToken";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("auth backend error: {0}")]
    Backend(String),
    #[error("token storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Credential checks against whatever issues sessions.
#[async_trait(?Send)]
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// `AuthError::InvalidCredentials` when rejected, `AuthError::Backend`
    /// when the backend cannot be reached.
    async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    /// End the current session on the backend side.
    ///
    /// # Errors
    ///
    /// `AuthError::Backend` when the backend cannot be reached.
    async fn logout(&self) -> Result<(), AuthError>;

    /// Resolve a persisted token to its user without a round trip.
    fn user_for_token(&self, token: &str) -> Option<User>;
}

/// Where the session token lives between page loads.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;

    /// Persist `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns the `StorageError` from the underlying store.
    fn save(&self, token: &str) -> Result<(), StorageError>;

    /// Forget the persisted token.
    ///
    /// # Errors
    ///
    /// Returns the `StorageError` from the underlying store.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Backend stand-in that accepts any credentials.
#[derive(Clone, Debug, Default)]
pub struct MockAuthBackend;

impl MockAuthBackend {
    pub const TOKEN: &'static str = "dummy-token";

    fn placeholder_user() -> User {
        User { id: "user-123".to_owned(), name: "Mohamed G.".to_owned() }
    }
}

#[async_trait(?Send)]
impl AuthBackend for MockAuthBackend {
    async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        log::debug!("mock login for {}", credentials.email);
        Ok(Session { user: Self::placeholder_user(), token: Self::TOKEN.to_owned() })
    }

    async fn logout(&self) -> Result<(), AuthError> {
        log::debug!("mock logout");
        Ok(())
    }

    fn user_for_token(&self, token: &str) -> Option<User> {
        // Presence is enough; the token is never verified.
        if token.is_empty() { None } else { Some(Self::placeholder_user()) }
    }
}

/// Token store backed by browser `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        storage::load_string(TOKEN_STORAGE_KEY)
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        storage::save_string(TOKEN_STORAGE_KEY, token)
    }

    fn clear(&self) -> Result<(), StorageError> {
        storage::remove(TOKEN_STORAGE_KEY)
    }
}

/// Process-local token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, StorageError> {
        self.token
            .lock()
            .map_err(|_| StorageError::Rejected("token store lock poisoned".to_owned()))
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        match self.slot() {
            Ok(slot) => slot.clone(),
            Err(e) => {
                log::warn!("token load failed: {e}");
                None
            }
        }
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        *self.slot()? = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot()? = None;
        Ok(())
    }
}

/// Login/logout/restore over an injected backend and token store.
#[derive(Clone)]
pub struct AuthService {
    backend: Arc<dyn AuthBackend>,
    tokens: Arc<dyn TokenStore>,
}

impl AuthService {
    pub fn new(backend: Arc<dyn AuthBackend>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { backend, tokens }
    }

    /// Mock backend with the browser token store.
    pub fn mock() -> Self {
        Self::new(Arc::new(MockAuthBackend), Arc::new(LocalStorageTokenStore))
    }

    /// Log in and persist the issued token.
    ///
    /// # Errors
    ///
    /// Returns the backend's error, or `AuthError::Storage` if the token
    /// could not be persisted. Nothing is persisted on failure.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let session = self.backend.login(credentials).await.inspect_err(|e| {
            log::warn!("login failed: {e}");
        })?;
        self.tokens.save(&session.token)?;
        log::info!("signed in as {}", session.user.id);
        Ok(session.user)
    }

    /// Log out and drop the persisted token.
    ///
    /// # Errors
    ///
    /// Returns the backend's error (token kept), or `AuthError::Storage` if
    /// the token could not be removed.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.backend.logout().await.inspect_err(|e| {
            log::warn!("logout failed: {e}");
        })?;
        self.tokens.clear()?;
        log::info!("signed out");
        Ok(())
    }

    /// Restore a session from a persisted token, if one exists.
    pub fn restore(&self) -> Option<User> {
        let token = self.tokens.load()?;
        let user = self.backend.user_for_token(&token);
        if user.is_some() {
            log::debug!("session restored from persisted token");
        }
        user
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish_non_exhaustive()
    }
}

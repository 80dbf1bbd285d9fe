//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! These helpers centralize the csr-only read/write behavior so the auth
//! token store does not repeat web-sys glue. Native builds (tests) have no
//! storage: reads return `None` and writes report `Unavailable`.

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No `localStorage` in this environment (native build, sandboxed iframe).
    #[error("local storage is unavailable")]
    Unavailable,
    /// The browser refused the operation (quota, privacy mode) or a lock was poisoned.
    #[error("storage operation rejected: {0}")]
    Rejected(String),
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(e) => Err(StorageError::Rejected(format!("{e:?}"))),
    }
}

/// Load the string stored under `key`, if any.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = match local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("read of {key} skipped: {e}");
                return None;
            }
        };
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("read of {key} failed: {e:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("no local storage; {key} reads as empty");
        None
    }
}

/// Store `value` under `key`.
///
/// # Errors
///
/// `StorageError::Unavailable` without `localStorage`, `StorageError::Rejected`
/// when the browser refuses the write.
pub fn save_string(key: &str, value: &str) -> Result<(), StorageError> {
    #[cfg(feature = "csr")]
    {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("no local storage; dropping {} bytes for {key}", value.len());
        Err(StorageError::Unavailable)
    }
}

/// Remove `key` from storage.
///
/// # Errors
///
/// `StorageError::Unavailable` without `localStorage`, `StorageError::Rejected`
/// when the browser refuses the removal.
pub fn remove(key: &str) -> Result<(), StorageError> {
    #[cfg(feature = "csr")]
    {
        local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Rejected(format!("{e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("no local storage; nothing to remove for {key}");
        Err(StorageError::Unavailable)
    }
}

//! Browser `localStorage` token store.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior: storage errors (private
//! mode, quota) are logged and the in-memory session carries on. Native
//! builds read nothing and write nothing.

#[cfg(test)]
#[path = "local_storage_test.rs"]
mod local_storage_test;

use crate::session::TokenStore;

#[derive(Clone, Debug)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            match storage()?.get_item(&self.key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("reading {} failed: {err:?}", self.key);
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = storage() {
                if let Err(err) = storage.set_item(&self.key, token) {
                    log::warn!("writing {} failed: {err:?}", self.key);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::debug!("token for {} not persisted outside the browser ({} bytes)", self.key, token.len());
        }
    }

    fn remove(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = storage() {
                if let Err(err) = storage.remove_item(&self.key) {
                    log::warn!("removing {} failed: {err:?}", self.key);
                }
            }
        }
    }
}

//! Session store: the bearer token and where it is persisted.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller owns exactly one [`Session`]. It is seeded from durable
//! storage at construction and mutated only by login, logout and a failed
//! startup probe. Storage is pluggable: browser `localStorage`, a token file
//! for the CLI, or memory for tests.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Durable slot for a single opaque token string.
///
/// Writes are best-effort; implementations log failures instead of
/// returning them, the in-memory session stays authoritative.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn remove(&self);
}

/// Process-local store. Clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn save(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn remove(&self) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// In-memory token mirrored into a [`TokenStore`].
#[derive(Debug)]
pub struct Session<S> {
    store: S,
    token: RwLock<Option<String>>,
}

impl<S: TokenStore> Session<S> {
    /// Read whatever token the store holds. Empty strings count as absent.
    pub fn restore(store: S) -> Self {
        let token = store.load().filter(|token| !token.is_empty());
        Self {
            store,
            token: RwLock::new(token),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_active(&self) -> bool {
        self.token.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    pub fn set(&self, token: &str) {
        self.store.save(token);
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    pub fn clear(&self) {
        self.store.remove();
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

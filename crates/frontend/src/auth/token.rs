//! Bearer token slot.
//!
//! Exclusive owner of the token's storage key; nothing else reads or writes
//! it directly. The token is opaque here: no shape, signature or expiry
//! checks.

use crate::config::StoreConfig;
use crate::storage::StorageBackend;

/// Persistent slot holding the bearer token
#[derive(Clone, Debug, PartialEq)]
pub struct TokenStore {
    backend: StorageBackend,
}

impl TokenStore {
    pub fn new(backend: StorageBackend) -> Self {
        Self { backend }
    }

    /// Current token, if any
    pub fn get(&self) -> Option<String> {
        self.backend.get(StoreConfig::TOKEN_KEY)
    }

    pub fn set(&self, token: &str) {
        self.backend.set(StoreConfig::TOKEN_KEY, token);
    }

    pub fn clear(&self) {
        self.backend.remove(StoreConfig::TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_token() {
        let store = TokenStore::new(StorageBackend::memory());
        store.set("abc");
        assert_eq!(store.get(), Some("abc".to_string()));
    }

    #[test]
    fn clear_empties_the_slot() {
        let store = TokenStore::new(StorageBackend::memory());
        store.set("abc");
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn null_backend_is_a_silent_no_op() {
        let store = TokenStore::new(StorageBackend::Null);
        store.set("abc");
        assert_eq!(store.get(), None);
        store.clear();
    }
}

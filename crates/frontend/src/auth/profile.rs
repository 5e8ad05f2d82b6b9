//! Cached user profile slot.
//!
//! A denormalized snapshot of the principal, written next to the token so a
//! page reload can rehydrate the session without a network round-trip. It is
//! display data only and may be stale relative to the backend.

use crate::config::StoreConfig;
use crate::storage::StorageBackend;
use playforge_http::types::UserProfile;

/// Persistent slot holding the cached [`UserProfile`]
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileCache {
    backend: StorageBackend,
}

impl ProfileCache {
    pub fn new(backend: StorageBackend) -> Self {
        Self { backend }
    }

    /// Cached profile, if present and decodable
    pub fn load(&self) -> Option<UserProfile> {
        self.backend
            .get(StoreConfig::PROFILE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn save(&self, profile: &UserProfile) {
        if let Ok(serialized) = serde_json::to_string(profile) {
            self.backend.set(StoreConfig::PROFILE_KEY, &serialized);
        }
    }

    pub fn clear(&self) {
        self.backend.remove(StoreConfig::PROFILE_KEY);
    }
}

//! Sound preference.
//!
//! A persisted boolean toggle, independent of the session; logging out never
//! clears it.

use gloo::storage::{LocalStorage, Storage};

use crate::config::StoreConfig;

/// Whether UI sounds are enabled (defaults to on)
pub fn sound_enabled() -> bool {
    LocalStorage::get(StoreConfig::SOUND_KEY).unwrap_or(true)
}

pub fn set_sound_enabled(enabled: bool) {
    let _ = LocalStorage::set(StoreConfig::SOUND_KEY, enabled);
}

//! Persistent key/value slots with a capability-checked backend.
//!
//! The backend is picked once at startup: a browser with localStorage gets
//! the real thing, everything else (pre-render, tests without a DOM) gets a
//! null object that reads empty and swallows writes. Callers never branch on
//! the environment themselves.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::Storage;

/// Storage backend chosen once at startup
#[derive(Clone, Debug)]
pub enum StorageBackend {
    /// Browser localStorage
    Browser,
    /// In-memory map, used by tests and fakes
    Memory(Rc<RefCell<HashMap<String, String>>>),
    /// No storage available; reads are empty, writes are silently dropped
    Null,
}

impl PartialEq for StorageBackend {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Browser, Self::Browser) | (Self::Null, Self::Null) => true,
            (Self::Memory(a), Self::Memory(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageBackend {
    /// Probe the environment once and return the matching backend
    pub fn detect() -> Self {
        if local_storage().is_some() {
            Self::Browser
        } else {
            Self::Null
        }
    }

    /// Fresh in-memory backend
    pub fn memory() -> Self {
        Self::Memory(Rc::new(RefCell::new(HashMap::new())))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Browser => local_storage().and_then(|s| s.get_item(key).ok().flatten()),
            Self::Memory(map) => map.borrow().get(key).cloned(),
            Self::Null => None,
        }
    }

    pub fn set(&self, key: &str, value: &str) {
        match self {
            Self::Browser => {
                if let Some(storage) = local_storage() {
                    let _ = storage.set_item(key, value);
                }
            }
            Self::Memory(map) => {
                map.borrow_mut().insert(key.to_string(), value.to_string());
            }
            Self::Null => {}
        }
    }

    pub fn remove(&self, key: &str) {
        match self {
            Self::Browser => {
                if let Some(storage) = local_storage() {
                    let _ = storage.remove_item(key);
                }
            }
            Self::Memory(map) => {
                map.borrow_mut().remove(key);
            }
            Self::Null => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_round_trips() {
        let backend = StorageBackend::memory();
        assert_eq!(backend.get("k"), None);

        backend.set("k", "v");
        assert_eq!(backend.get("k"), Some("v".to_string()));

        backend.remove("k");
        assert_eq!(backend.get("k"), None);
    }

    #[test]
    fn null_backend_reads_empty_and_ignores_writes() {
        let backend = StorageBackend::Null;
        backend.set("k", "v");
        assert_eq!(backend.get("k"), None);
        backend.remove("k");
    }

    #[test]
    fn memory_backends_compare_by_identity() {
        let a = StorageBackend::memory();
        let b = StorageBackend::memory();
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }
}

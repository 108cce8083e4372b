//! `localStorage` backing for the shared session store.

use common::session::{MemoryStorage, SessionStorage};
use gloo_console::warn;
use web_sys::Storage;

pub enum BrowserStorage {
    Local(Storage),
    /// Private browsing modes may refuse `localStorage`; the session then
    /// lasts until the tab is closed.
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => BrowserStorage::Local(storage),
            None => {
                warn!("localStorage unavailable, keeping the session in memory");
                BrowserStorage::Memory(MemoryStorage::default())
            }
        }
    }
}

impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStorage::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) {
        match self {
            BrowserStorage::Local(storage) => {
                if storage.set_item(key, value).is_err() {
                    warn!("Could not persist", key);
                }
            }
            BrowserStorage::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) {
        match self {
            BrowserStorage::Local(storage) => {
                let _ = storage.remove_item(key);
            }
            BrowserStorage::Memory(memory) => memory.remove(key),
        }
    }
}

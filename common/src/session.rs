//! Authenticated session: the bearer token and the user profile.
//!
//! The store is an explicit object passed to the HTTP client and the views.
//! Login saves a session, logout or a 401 clears it. Persistence goes through
//! `SessionStorage` so the browser can back it with `localStorage` while tests
//! use `MemoryStorage`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::model::user::{LoginResponse, User};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Key/value persistence for the session, string in, string out.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Volatile storage, used in tests and when the browser refuses `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Self {
            token: response.token,
            user: response.user,
        }
    }
}

/// Marker taken when a request starts; compared when its response lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

pub struct SessionStore<S: SessionStorage> {
    storage: S,
    generation: Cell<u64>,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            generation: Cell::new(0),
        }
    }

    /// Restores the session persisted by a previous page load. A stored user
    /// that no longer parses is treated as no session at all.
    pub fn load(&self) -> Option<Session> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
        let user = self
            .storage
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<User>(&raw).ok())?;
        Some(Session { token, user })
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn save(&self, session: &Session) -> Result<(), serde_json::Error> {
        let user = serde_json::to_string(&session.user)?;
        self.storage.set(TOKEN_KEY, &session.token);
        self.storage.set(USER_KEY, &user);
        Ok(())
    }

    /// Drops the persisted session and invalidates every in-flight request.
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.generation.set(self.generation.get() + 1);
    }

    pub fn generation(&self) -> Generation {
        Generation(self.generation.get())
    }

    /// Whether a response for a request started at `generation` may still be
    /// applied.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.generation() == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> Session {
        Session {
            token: "abc.def.ghi".to_string(),
            user: User {
                id: Some(3),
                username: Some("siti".to_string()),
                full_name: "Siti Rahmawati".to_string(),
                role: "TEACHER".to_string(),
            },
        }
    }

    #[test]
    fn saved_session_loads_back() {
        let store = SessionStore::new(MemoryStorage::default());
        assert_eq!(store.load(), None);
        store.save(&signed_in()).unwrap();
        assert_eq!(store.load(), Some(signed_in()));
        assert_eq!(store.token().as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn clear_removes_both_keys_and_bumps_generation() {
        let store = SessionStore::new(MemoryStorage::default());
        store.save(&signed_in()).unwrap();
        let started = store.generation();

        store.clear();

        assert_eq!(store.load(), None);
        assert_eq!(store.token(), None);
        assert!(!store.is_current(started));
        assert!(store.is_current(store.generation()));
    }

    #[test]
    fn corrupt_user_means_no_session() {
        let storage = MemoryStorage::default();
        storage.set(TOKEN_KEY, "abc");
        storage.set(USER_KEY, "{not json");
        let store = SessionStore::new(storage);
        assert_eq!(store.load(), None);
    }
}

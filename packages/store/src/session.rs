//! # Session: the single-record user store
//!
//! [`Session`] owns the create/read/delete lifecycle of the [`SessionUser`]
//! record. It never talks to a server: `login` and `register` fabricate a record
//! as soon as every required field is non-empty, and `logout` removes it.
//!
//! ## [`KeyValueStore`] trait
//!
//! Persistence goes through a tiny string-keyed interface so the same logic runs
//! against an in-memory map ([`crate::MemoryStore`], tests), a file per key
//! ([`crate::FileStore`], desktop) or `window.localStorage`
//! ([`crate::LocalStorageStore`], web).
//!
//! ## Write path
//!
//! | Method | On success | On failure |
//! |--------|------------|------------|
//! | [`login`](Session::login) | writes `SessionUser::demo(email)` | `MissingField`, nothing written |
//! | [`register`](Session::register) | writes `SessionUser::registered(name, email)` | `MissingField`, nothing written |
//! | [`logout`](Session::logout) | removes the key (idempotent) | `Storage`, the record stays |
//!
//! Only one writer is assumed. Behaviour with several tabs sharing the same
//! storage is undefined.

use crate::error::SessionError;
use crate::models::SessionUser;

/// Default key the record is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "user";

/// String-keyed persistence used by [`Session`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError>;
    fn set(&self, key: &str, value: &str) -> Result<(), SessionError>;
    fn remove(&self, key: &str) -> Result<(), SessionError>;
}

/// The session store, backed by a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the stored record.
    ///
    /// A record that fails to decode is treated as absent.
    pub fn current(&self) -> Option<SessionUser> {
        let raw = match self.store.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Failed to read session: {}", e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring unreadable session record: {}", e);
                None
            }
        }
    }

    /// Fabricate a demo record for any non-empty email and password.
    pub fn login(&self, email: &str, password: &str) -> Result<SessionUser, SessionError> {
        require("Email", email)?;
        require("Password", password)?;

        let user = SessionUser::demo(email);
        self.save(&user)?;
        tracing::info!("Logged in as {}", user.email);
        Ok(user)
    }

    /// Fabricate a fresh record for a non-empty name, email and password.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<SessionUser, SessionError> {
        require("Name", name)?;
        require("Email", email)?;
        require("Password", password)?;

        let user = SessionUser::registered(name, email);
        self.save(&user)?;
        tracing::info!("Registered {}", user.email);
        Ok(user)
    }

    /// Remove the stored record. Calling this with no session is a no-op.
    ///
    /// A backend failure is returned; the record is then still stored and will
    /// be read back by the next [`current`](Session::current).
    pub fn logout(&self) -> Result<(), SessionError> {
        if let Err(e) = self.store.remove(&self.key) {
            tracing::error!("Failed to clear session: {}", e);
            return Err(e);
        }
        tracing::info!("Logged out");
        Ok(())
    }

    fn save(&self, user: &SessionUser) -> Result<(), SessionError> {
        let json = serde_json::to_string(user)?;
        self.store.set(&self.key, &json)
    }
}

fn require(field: &'static str, value: &str) -> Result<(), SessionError> {
    if value.is_empty() {
        return Err(SessionError::MissingField(field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::Role;

    #[test]
    fn test_login_writes_record() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        let user = session.login("farmer@example.com", "secret").unwrap();
        assert_eq!(user.name, "Demo Farmer");
        assert_eq!(user.points, 120);
        assert_eq!(user.role, Role::Farmer);

        // Readable right away, both through the session and raw storage
        assert_eq!(session.current(), Some(user));
        let raw = store.get("user").unwrap().unwrap();
        assert!(raw.contains("\"email\":\"farmer@example.com\""));
    }

    #[test]
    fn test_login_accepts_any_non_empty_pair() {
        let session = Session::new(MemoryStore::new());
        for (email, password) in [("a", "b"), (" ", " "), ("not-an-email", "x")] {
            let user = session.login(email, password).unwrap();
            assert_eq!(user.email, email);
        }
    }

    #[test]
    fn test_login_rejects_empty_fields() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        for (email, password) in [("", "secret"), ("farmer@example.com", ""), ("", "")] {
            let err = session.login(email, password).unwrap_err();
            assert!(matches!(err, SessionError::MissingField(_)));
        }
        assert!(store.is_empty());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_register_rejects_empty_fields() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());

        let cases = [
            ("", "a@b.c", "pw"),
            ("Asha", "", "pw"),
            ("Asha", "a@b.c", ""),
        ];
        for (name, email, password) in cases {
            assert!(session.register(name, email, password).is_err());
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_register_starts_at_zero_points() {
        let session = Session::new(MemoryStore::new());
        let user = session.register("Asha Patel", "asha@example.com", "pw").unwrap();
        assert_eq!(user.name, "Asha Patel");
        assert_eq!(user.points, 0);
        assert_eq!(session.current().unwrap().name, "Asha Patel");
    }

    #[test]
    fn test_failed_login_keeps_existing_record() {
        let session = Session::new(MemoryStore::new());
        session.register("Asha", "asha@example.com", "pw").unwrap();
        assert!(session.login("", "pw").is_err());
        assert_eq!(session.current().unwrap().name, "Asha");
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = MemoryStore::new();
        let session = Session::new(store.clone());
        session.login("farmer@example.com", "secret").unwrap();

        session.logout().unwrap();
        assert!(session.current().is_none());
        assert!(store.is_empty());

        session.logout().unwrap();
        assert!(session.current().is_none());
        assert!(store.is_empty());
    }

    /// Backend whose removals always fail.
    #[derive(Clone, Default)]
    struct StickyStore {
        inner: MemoryStore,
    }

    impl KeyValueStore for StickyStore {
        fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
            self.inner.set(key, value)
        }

        fn remove(&self, _key: &str) -> Result<(), SessionError> {
            Err(SessionError::Storage("read-only".to_string()))
        }
    }

    #[test]
    fn test_failed_logout_is_reported() {
        let session = Session::new(StickyStore::default());
        let user = session.login("farmer@example.com", "secret").unwrap();

        let err = session.logout().unwrap_err();
        assert!(matches!(err, SessionError::Storage(_)));
        assert_eq!(session.current(), Some(user));
    }

    #[test]
    fn test_corrupt_record_reads_as_absent() {
        let store = MemoryStore::new();
        store.set("user", "{not json").unwrap();
        let session = Session::new(store);
        assert!(session.current().is_none());
    }

    #[test]
    fn test_custom_key() {
        let store = MemoryStore::new();
        let session = Session::with_key(store.clone(), "agrifuture.user");
        session.login("a@b.c", "pw").unwrap();
        assert!(store.get("agrifuture.user").unwrap().is_some());
        assert!(store.get("user").unwrap().is_none());
    }
}

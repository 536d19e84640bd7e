//! Shared session constructor for all platforms.
//!
//! Returns a [`store::Session`] backed by the appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorageStore`]
//! - **Desktop** (native): one file per key via [`store::FileStore`] under
//!   `<data_dir>/agrifuture/`
//! - **WASM without `web`**: in-memory only, nothing survives a reload

use crate::config::app_config;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformBackend = store::LocalStorageStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformBackend = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformBackend = store::FileStore;

pub type AppSession = store::Session<PlatformBackend>;

/// Create the platform-appropriate session store, keyed per `agrifuture.toml`.
pub fn make_session() -> AppSession {
    let key = app_config().session.storage_key.clone();
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::Session::with_key(store::LocalStorageStore::new(), key)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::Session::with_key(store::MemoryStore::new(), key)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("agrifuture");
        store::Session::with_key(store::FileStore::new(base), key)
    }
}

//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used on desktop. Each key is one file
//! under a base directory, so the session record survives app restarts the way
//! `localStorage` does in a browser.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json          # the serialized record
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/agrifuture/` |
//! | Linux | `~/.local/share/agrifuture/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\agrifuture\` |

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SessionError;
use crate::session::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug, PartialEq)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        // Keys are app-defined, but keep them inside the base directory regardless
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SessionError> {
        std::fs::create_dir_all(&self.base).map_err(|e| SessionError::Storage(e.to_string()))?;
        std::fs::write(self.entry_path(key), value).map_err(|e| SessionError::Storage(e.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        match std::fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("agrifuture_test_{}_{}", tag, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_session_survives_restart() {
        let dir = temp_dir("restart");

        let session = Session::new(FileStore::new(dir.clone()));
        let user = session.login("farmer@example.com", "secret").unwrap();

        // Re-open from same directory, as after a process restart
        let reopened = Session::new(FileStore::new(dir.clone()));
        assert_eq!(reopened.current(), Some(user));

        reopened.logout().unwrap();
        assert!(Session::new(FileStore::new(dir.clone())).current().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_entries() {
        let dir = temp_dir("missing");
        let store = FileStore::new(dir.clone());

        // Nothing created yet: reads are empty and removes succeed
        assert!(store.get("user").unwrap().is_none());
        store.remove("user").unwrap();
        store.remove("user").unwrap();

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_keys_stay_inside_base() {
        let store = FileStore::new(PathBuf::from("/tmp/agrifuture"));
        let path = store.entry_path("../escape");
        assert!(path.starts_with("/tmp/agrifuture"));
        assert_eq!(path.file_name().unwrap(), ".._escape.json");
    }
}

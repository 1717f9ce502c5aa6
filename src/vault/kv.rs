//! Persisted key/value storage behind the vault.
//!
//! The store is injected into `VaultStore` rather than reached through
//! ambient state, so tests can swap in `MemoryStore` and the engine
//! never touches the filesystem directly.  Only single-key atomicity
//! is assumed.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{PassVaultError, Result};

/// Opaque get/set/delete-by-key persistence.
pub trait KeyValueStore {
    /// Read the value for `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, atomically per key.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`.  Removing an absent key is a no-op.
    fn delete(&mut self, key: &str) -> Result<()>;
}

/// File-backed store: one file per key under a directory.
///
/// Writes go through a temp file in the same directory followed by a
/// rename, so readers never see a half-written value.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(|e| PassVaultError::StorageFailed(format!("create {dir:?}: {e}")))?;
        }
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PassVaultError::StorageFailed(format!("read '{key}': {e}"))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp_path = self.dir.join(format!(".{key}.tmp"));

        fs::write(&tmp_path, value)
            .map_err(|e| PassVaultError::StorageFailed(format!("write '{key}': {e}")))?;

        // Owner-only permissions before the value lands at its final name.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, perms).map_err(|e| {
                PassVaultError::StorageFailed(format!("set permissions on '{key}': {e}"))
            })?;
        }

        fs::rename(&tmp_path, &path)
            .map_err(|e| PassVaultError::StorageFailed(format!("rename '{key}': {e}")))?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PassVaultError::StorageFailed(format!(
                "delete '{key}': {e}"
            ))),
        }
    }
}

/// In-memory store for tests and ephemeral vaults.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.map.remove(key);
        Ok(())
    }
}

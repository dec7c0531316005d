//! File-backed key/value storage for the CLI session.
//!
//! The whole store is one small JSON object rewritten on every change. A
//! missing or unreadable file reads as empty so a corrupt state file never
//! blocks signing in again.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use portal::KeyValueStorage;

const STATE_DIR: &str = ".tutorhub";
const STATE_FILE: &str = "session.json";

#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.tutorhub/session.json`, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        let home = std::env::var_os("HOME").filter(|h| !h.is_empty())?;
        Some(PathBuf::from(home).join(STATE_DIR).join(STATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "could not read state file");
                return BTreeMap::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "ignoring corrupt state file");
                BTreeMap::new()
            }
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) {
        if let Err(err) = self.try_write(entries) {
            tracing::warn!(path = %self.path.display(), error = %err, "could not write state file");
        }
    }

    fn try_write(&self, entries: &BTreeMap<String, String>) -> io::Result<()> {
        if entries.is_empty() {
            return match fs::remove_file(&self.path) {
                Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
                _ => Ok(()),
            };
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(entries).map_err(io::Error::other)?;
        fs::write(&self.path, raw)?;
        restrict_permissions(&self.path)
    }
}

/// The file holds a bearer token; keep it owner-only.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.read_entries();
        entries.insert(key.to_owned(), value.to_owned());
        self.write_entries(&entries);
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read_entries();
        if entries.remove(key).is_some() {
            self.write_entries(&entries);
        }
    }
}

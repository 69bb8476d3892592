use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::CoreError;

use super::traits::KeyValueStore;

/// Directory-backed key-value store: one `<key>.json` file per key (native only).
///
/// Keys map to file names one-to-one: `[a-z0-9-]` is kept as is and any
/// other character becomes `_` followed by its UTF-8 bytes in upper hex
/// (`profile:a.b` → `profile_3Aa_2Eb.json`). Upper-case letters are escaped
/// too, so keys differing only in case stay apart on case-insensitive
/// filesystems.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Use `root` as the storage directory. It is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len());
        let mut buf = [0u8; 4];
        for c in key.chars() {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                name.push(c);
            } else {
                name.push('_');
                name.push_str(&hex::encode_upper(c.encode_utf8(&mut buf).as_bytes()));
            }
        }
        self.root.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CoreError::Storage {
                key: key.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.path_for(key);
        // Write to a sibling file first so a crash never leaves half a payload.
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), CoreError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

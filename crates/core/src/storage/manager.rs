use log::debug;

use crate::errors::CoreError;
use crate::models::snapshot::TrackerSnapshot;

use super::encryption::{self, KdfParams};
use super::format;

/// Password-protected, portable backups of the tracker state.
pub struct SnapshotManager;

impl SnapshotManager {
    /// Serialize and encrypt a snapshot with the default KDF cost.
    ///
    /// Flow: TrackerSnapshot → bincode → AES-256-GCM(Argon2id(password)) → IPOT bytes
    pub fn export(snapshot: &TrackerSnapshot, password: &str) -> Result<Vec<u8>, CoreError> {
        Self::export_with_params(snapshot, password, &KdfParams::default())
    }

    /// Same as [`export`](Self::export) with explicit KDF parameters.
    pub fn export_with_params(
        snapshot: &TrackerSnapshot,
        password: &str,
        kdf_params: &KdfParams,
    ) -> Result<Vec<u8>, CoreError> {
        if password.is_empty() {
            return Err(CoreError::ValidationError(
                "Snapshot password must not be empty".into(),
            ));
        }
        kdf_params.validate()?;

        let plaintext = bincode::serialize(snapshot)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize snapshot: {e}")))?;
        let sealed = encryption::seal(&plaintext, password, kdf_params)?;
        let bytes = format::encode(kdf_params, &sealed);

        debug!(
            "Exported snapshot: {} watchlist entries, {} activity events, {} bytes",
            snapshot.interests.len(),
            snapshot.activity.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Decrypt and deserialize a snapshot.
    ///
    /// Flow: IPOT bytes → parse header → Argon2id(password, salt) → AES-256-GCM → bincode
    pub fn import(data: &[u8], password: &str) -> Result<TrackerSnapshot, CoreError> {
        let container = format::decode(data)?;
        let plaintext = encryption::open(&container.sealed, password, &container.kdf_params)?;
        bincode::deserialize(&plaintext)
            .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize snapshot: {e}")))
    }

    /// Write an encrypted snapshot to disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_to_file(
        snapshot: &TrackerSnapshot,
        path: impl AsRef<std::path::Path>,
        password: &str,
    ) -> Result<(), CoreError> {
        let bytes = Self::export(snapshot, password)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read an encrypted snapshot from disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn import_from_file(
        path: impl AsRef<std::path::Path>,
        password: &str,
    ) -> Result<TrackerSnapshot, CoreError> {
        let bytes = std::fs::read(path)?;
        Self::import(&bytes, password)
    }
}

use crate::errors::CoreError;

/// Key-value persistence used for the watchlist, activity log and profiles.
///
/// Values are opaque strings (JSON in practice). Implementations decide where
/// they live: memory for tests and embedding, a directory of files natively,
/// browser storage behind a WASM binding.
pub trait KeyValueStore: Send {
    /// Read the value stored under `key`. A missing key is `Ok(None)`, not an error.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete `key`. Removing a missing key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}

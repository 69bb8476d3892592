use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_KEY: &str = "interested-ipos";
pub const DEFAULT_ACTIVITY_KEY: &str = "interested-ipos-activity";

/// Cache revalidation window (5 minutes).
pub const DEFAULT_STALE_AFTER_SECS: u64 = 300;

/// Tracker configuration: where the watchlist lives and how long it stays fresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerSettings {
    /// Persistence key of the watchlist mapping
    pub storage_key: String,

    /// Persistence key of the recorded activity log
    pub activity_key: String,

    /// Seconds before the cached watchlist is reloaded from persistence
    pub stale_after_secs: u64,

    /// Remote catalog endpoint. `None` uses the built-in catalog.
    pub catalog_url: Option<String>,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            activity_key: DEFAULT_ACTIVITY_KEY.to_string(),
            stale_after_secs: DEFAULT_STALE_AFTER_SECS,
            catalog_url: None,
        }
    }
}

impl TrackerSettings {
    /// Read settings from `IPO_TRACKER_*` environment variables.
    /// Missing, empty or unparseable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            storage_key: non_empty("IPO_TRACKER_STORAGE_KEY").unwrap_or(defaults.storage_key),
            activity_key: non_empty("IPO_TRACKER_ACTIVITY_KEY").unwrap_or(defaults.activity_key),
            stale_after_secs: non_empty("IPO_TRACKER_STALE_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.stale_after_secs),
            catalog_url: non_empty("IPO_TRACKER_CATALOG_URL").or(defaults.catalog_url),
        }
    }

    /// Staleness window, capped at 100 years.
    pub fn stale_after(&self) -> chrono::Duration {
        const MAX_SECS: u64 = 100 * 365 * 24 * 60 * 60;
        chrono::Duration::seconds(self.stale_after_secs.min(MAX_SECS) as i64)
    }
}

use chrono::{DateTime, Utc};
use log::debug;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::CoreError;
use crate::models::profile::{NotificationPrefs, NotificationPrefsUpdate, Profile, ProfileUpdate};
use crate::storage::traits::KeyValueStore;

/// Reads and upserts user profiles and notification preferences.
///
/// Unlike the watchlist cache, this data is authoritative: read, parse
/// and write failures are returned to the caller instead of swallowed.
pub struct ProfileService;

impl ProfileService {
    pub fn new() -> Self {
        Self
    }

    pub fn profile_key(user_id: &str) -> String {
        format!("profile:{user_id}")
    }

    pub fn notification_prefs_key(user_id: &str) -> String {
        format!("notification-prefs:{user_id}")
    }

    /// Stored profile for `user_id`, or `None` if it was never saved.
    pub fn get_profile(
        &self,
        store: &dyn KeyValueStore,
        user_id: &str,
    ) -> Result<Option<Profile>, CoreError> {
        let user_id = Self::validate_user_id(user_id)?;
        Self::read(store, &Self::profile_key(user_id))
    }

    /// Create or fully replace the profile of `user_id`.
    pub fn upsert_profile(
        &self,
        store: &mut dyn KeyValueStore,
        user_id: &str,
        update: ProfileUpdate,
        now: DateTime<Utc>,
    ) -> Result<Profile, CoreError> {
        let user_id = Self::validate_user_id(user_id)?;
        let profile = Profile {
            user_id: user_id.to_string(),
            risk_tolerance: Some(update.risk_tolerance),
            investment_horizon: Some(update.investment_horizon),
            income_bracket: Some(update.income_bracket),
            updated_at: now,
        };
        Self::write(store, &Self::profile_key(user_id), &profile)?;
        debug!("Saved profile for user '{user_id}'");
        Ok(profile)
    }

    /// Stored notification preferences for `user_id`, or `None` if never saved.
    pub fn get_notification_prefs(
        &self,
        store: &dyn KeyValueStore,
        user_id: &str,
    ) -> Result<Option<NotificationPrefs>, CoreError> {
        let user_id = Self::validate_user_id(user_id)?;
        Self::read(store, &Self::notification_prefs_key(user_id))
    }

    /// Create or fully replace the notification preferences of `user_id`.
    pub fn update_notification_prefs(
        &self,
        store: &mut dyn KeyValueStore,
        user_id: &str,
        update: NotificationPrefsUpdate,
        now: DateTime<Utc>,
    ) -> Result<NotificationPrefs, CoreError> {
        let user_id = Self::validate_user_id(user_id)?;
        let prefs = NotificationPrefs {
            user_id: user_id.to_string(),
            email_notifications: update.email_notifications,
            push_notifications: update.push_notifications,
            ipo_reminders: update.ipo_reminders,
            market_updates: update.market_updates,
            portfolio_alerts: update.portfolio_alerts,
            updated_at: now,
        };
        Self::write(store, &Self::notification_prefs_key(user_id), &prefs)?;
        debug!(
            "Saved notification preferences for user '{user_id}' ({} channels on)",
            update.enabled_count()
        );
        Ok(prefs)
    }

    fn validate_user_id(user_id: &str) -> Result<&str, CoreError> {
        let trimmed = user_id.trim();
        if trimmed.is_empty() {
            return Err(CoreError::ValidationError("User ID is required".into()));
        }
        Ok(trimmed)
    }

    fn read<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, CoreError> {
        match store.get(key)? {
            Some(raw) => serde_json::from_str(&raw)
                .map(Some)
                .map_err(|e| CoreError::Deserialization(format!("Corrupt record '{key}': {e}"))),
            None => Ok(None),
        }
    }

    fn write<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> Result<(), CoreError> {
        let json = serde_json::to_string(value)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize '{key}': {e}")))?;
        store.set(key, &json)
    }
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, error, warn};

use crate::models::activity::{ActivityEvent, ActivityKind};
use crate::models::interest::{InterestMap, InterestedIpo, Investment, StoredInterestMap};
use crate::models::ipo::Ipo;
use crate::models::settings::TrackerSettings;
use crate::models::snapshot::TrackerSnapshot;
use crate::storage::traits::KeyValueStore;

/// Oldest activity events are dropped beyond this many.
pub const MAX_ACTIVITY_EVENTS: usize = 1_000;

/// Source of "now". Injectable so date-dependent behavior is testable.
pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// The watchlist: which IPOs the user flagged, and their investment and
/// notification sub-state.
///
/// Owns its cache and persistence. Every mutation writes the whole mapping
/// back (last write wins). Persistence problems never reach the caller:
/// unreadable data loads as an empty watchlist, failed writes are logged
/// and the in-memory state keeps the change.
pub struct InterestStore {
    persistence: Box<dyn KeyValueStore>,
    storage_key: String,
    activity_key: String,
    stale_after: chrono::Duration,
    clock: Clock,
    interests: InterestMap,
    activity: Vec<ActivityEvent>,
    loaded_at: DateTime<Utc>,
    invalidated: bool,
}

impl std::fmt::Debug for InterestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InterestStore")
            .field("storage_key", &self.storage_key)
            .field("entries", &self.interests.len())
            .field("activity", &self.activity.len())
            .field("loaded_at", &self.loaded_at)
            .field("invalidated", &self.invalidated)
            .finish()
    }
}

impl InterestStore {
    /// Open the watchlist stored in `persistence`, using the system clock.
    pub fn open(persistence: Box<dyn KeyValueStore>, settings: &TrackerSettings) -> Self {
        Self::open_with_clock(persistence, settings, Box::new(Utc::now))
    }

    /// Open the watchlist with an explicit clock.
    pub fn open_with_clock(
        persistence: Box<dyn KeyValueStore>,
        settings: &TrackerSettings,
        clock: Clock,
    ) -> Self {
        let loaded_at = clock();
        let mut store = Self {
            persistence,
            storage_key: settings.storage_key.clone(),
            activity_key: settings.activity_key.clone(),
            stale_after: settings.stale_after(),
            clock,
            interests: InterestMap::new(),
            activity: Vec::new(),
            loaded_at,
            invalidated: false,
        };
        store.reload();
        store
    }

    // ── Clock & Cache ───────────────────────────────────────────────

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Replace the clock. Cache age is measured from the new clock's "now".
    pub fn set_clock(&mut self, clock: Clock) {
        self.clock = clock;
        self.loaded_at = self.now();
    }

    /// Mark the cache stale; the next revalidation reloads from persistence.
    pub fn invalidate(&mut self) {
        self.invalidated = true;
    }

    /// `true` once invalidated or older than the staleness window.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.invalidated || self.now() - self.loaded_at >= self.stale_after
    }

    /// Reload from persistence if the cache is stale. Returns `true` if it reloaded.
    pub fn revalidate(&mut self) -> bool {
        if self.is_stale() {
            self.reload();
            true
        } else {
            false
        }
    }

    /// Revalidate, then hand back the cache for reading.
    ///
    /// Every read through the tracker goes via this, so an invalidated or
    /// expired cache never answers a query.
    pub fn refreshed(&mut self) -> &Self {
        self.revalidate();
        self
    }

    /// Unconditionally re-read the watchlist and activity log.
    pub fn reload(&mut self) {
        self.interests = self.load_interests();
        self.activity = self.load_activity();
        self.loaded_at = self.now();
        self.invalidated = false;
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Flag `ipo_id` as interesting, or revoke it if already flagged.
    ///
    /// A new entry copies `snapshot`. Revoking deletes the entry outright,
    /// so two toggles in a row leave no trace in the watchlist.
    /// Returns the resulting interest state.
    pub fn toggle_interest(&mut self, ipo_id: &str, snapshot: &Ipo) -> bool {
        self.revalidate();

        let interested = match self.interests.get_mut(ipo_id) {
            Some(entry) => {
                entry.interested = !entry.interested;
                entry.interested
            }
            None => {
                let mut ipo = snapshot.clone();
                if ipo.id != ipo_id {
                    debug!("Snapshot id '{}' re-keyed to '{ipo_id}'", ipo.id);
                    ipo.id = ipo_id.to_string();
                }
                self.interests.insert(ipo_id.to_string(), InterestedIpo::new(ipo));
                true
            }
        };

        let kind = if interested {
            ActivityKind::InterestMarked
        } else {
            self.interests.remove(ipo_id);
            ActivityKind::InterestRemoved
        };
        self.record(ipo_id, kind);
        self.persist();
        interested
    }

    /// Flag every IPO in `ipos`. Catalog fields are refreshed from the input;
    /// existing investment and notification settings are kept.
    /// Returns how many IPOs were newly added. Empty input touches nothing.
    pub fn mark_multiple_as_interested(&mut self, ipos: &[Ipo]) -> usize {
        if ipos.is_empty() {
            debug!("Bulk interest with no IPOs, nothing to do");
            return 0;
        }
        self.revalidate();

        let mut added = 0;
        for ipo in ipos {
            match self.interests.get_mut(&ipo.id) {
                Some(entry) => {
                    entry.ipo = ipo.clone();
                    entry.interested = true;
                }
                None => {
                    self.interests.insert(ipo.id.clone(), InterestedIpo::new(ipo.clone()));
                    self.record(&ipo.id, ActivityKind::InterestMarked);
                    added += 1;
                }
            }
        }

        self.persist();
        added
    }

    /// Replace the investment of a flagged IPO wholesale.
    /// Returns `false` (and changes nothing) if the IPO is not on the watchlist.
    pub fn update_investment(&mut self, ipo_id: &str, investment: Investment) -> bool {
        self.revalidate();

        let Some(entry) = self.interests.get_mut(ipo_id) else {
            debug!("Investment update for untracked IPO '{ipo_id}' ignored");
            return false;
        };
        entry.investment = Some(investment);

        self.record(ipo_id, ActivityKind::InvestmentUpdated);
        self.persist();
        true
    }

    /// Flip the listing-day notification of a flagged IPO.
    /// Returns `false` (and changes nothing) if the IPO is not on the watchlist.
    pub fn toggle_notification(&mut self, ipo_id: &str) -> bool {
        self.revalidate();

        let Some(entry) = self.interests.get_mut(ipo_id) else {
            debug!("Notification toggle for untracked IPO '{ipo_id}' ignored");
            return false;
        };
        entry.notify_on_date = !entry.notify_on_date;

        let kind = if entry.notify_on_date {
            ActivityKind::NotificationEnabled
        } else {
            ActivityKind::NotificationDisabled
        };
        self.record(ipo_id, kind);
        self.persist();
        true
    }

    /// Replace the whole state (e.g., after importing a backup) and persist it.
    pub fn restore(&mut self, snapshot: TrackerSnapshot) {
        self.interests = snapshot.interests;
        self.interests.retain(|_, entry| entry.interested);
        self.activity = snapshot.activity;
        self.trim_activity();
        self.loaded_at = self.now();
        self.invalidated = false;
        self.persist();
    }

    // ── Reads ───────────────────────────────────────────────────────

    #[must_use]
    pub fn is_interested(&self, ipo_id: &str) -> bool {
        self.interests.get(ipo_id).is_some_and(|e| e.interested)
    }

    #[must_use]
    pub fn get(&self, ipo_id: &str) -> Option<&InterestedIpo> {
        self.interests.get(ipo_id).filter(|e| e.interested)
    }

    /// All flagged IPOs, ordered by id.
    #[must_use]
    pub fn all_interested(&self) -> Vec<&InterestedIpo> {
        self.interests.values().filter(|e| e.interested).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.interests.values().filter(|e| e.interested).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flagged IPOs listed strictly before `today`.
    #[must_use]
    pub fn past_interested_as_of(&self, today: NaiveDate) -> Vec<&InterestedIpo> {
        self.interests
            .values()
            .filter(|e| e.interested && e.ipo.expected_date < today)
            .collect()
    }

    /// Flagged IPOs listing on or after `today`. Today counts as upcoming.
    #[must_use]
    pub fn future_interested_as_of(&self, today: NaiveDate) -> Vec<&InterestedIpo> {
        self.interests
            .values()
            .filter(|e| e.interested && e.ipo.expected_date >= today)
            .collect()
    }

    #[must_use]
    pub fn past_interested(&self) -> Vec<&InterestedIpo> {
        self.past_interested_as_of(self.today())
    }

    #[must_use]
    pub fn future_interested(&self) -> Vec<&InterestedIpo> {
        self.future_interested_as_of(self.today())
    }

    /// Investment value of IPOs already listed on `today`.
    ///
    /// Shares are valued at the mid-point of the published price range;
    /// a cash amount counts as-is. Upcoming IPOs contribute nothing.
    #[must_use]
    pub fn calculate_total_investment_as_of(&self, today: NaiveDate) -> f64 {
        self.past_interested_as_of(today)
            .iter()
            .map(|e| e.investment_value())
            .sum()
    }

    #[must_use]
    pub fn calculate_total_investment(&self) -> f64 {
        self.calculate_total_investment_as_of(self.today())
    }

    /// Recorded activity, oldest first.
    #[must_use]
    pub fn activity(&self) -> &[ActivityEvent] {
        &self.activity
    }

    /// Copy of the full state, for backups.
    #[must_use]
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            interests: self.interests.clone(),
            activity: self.activity.clone(),
        }
    }

    pub fn persistence(&self) -> &dyn KeyValueStore {
        self.persistence.as_ref()
    }

    pub fn persistence_mut(&mut self) -> &mut dyn KeyValueStore {
        self.persistence.as_mut()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn record(&mut self, ipo_id: &str, kind: ActivityKind) {
        let now = self.now();
        self.activity.push(ActivityEvent::new(ipo_id, kind, now));
        self.trim_activity();
    }

    fn trim_activity(&mut self) {
        if self.activity.len() > MAX_ACTIVITY_EVENTS {
            let excess = self.activity.len() - MAX_ACTIVITY_EVENTS;
            self.activity.drain(..excess);
        }
    }

    fn load_interests(&mut self) -> InterestMap {
        let Some(raw) = self.read_key(&self.storage_key) else {
            return InterestMap::new();
        };
        match serde_json::from_str::<StoredInterestMap>(&raw) {
            // Revoked entries are never stored; drop any left by older writers.
            Ok(stored) => stored
                .into_iter()
                .filter(|(_, entry)| entry.interested)
                .map(|(id, entry)| (id, InterestedIpo::from(entry)))
                .collect(),
            Err(e) => {
                warn!("Corrupt watchlist under '{}', starting empty: {e}", self.storage_key);
                let key = self.storage_key.clone();
                self.discard_key(&key);
                InterestMap::new()
            }
        }
    }

    fn load_activity(&mut self) -> Vec<ActivityEvent> {
        let Some(raw) = self.read_key(&self.activity_key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(activity) => activity,
            Err(e) => {
                warn!("Corrupt activity log under '{}', starting empty: {e}", self.activity_key);
                let key = self.activity_key.clone();
                self.discard_key(&key);
                Vec::new()
            }
        }
    }

    fn read_key(&self, key: &str) -> Option<String> {
        match self.persistence.get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read '{key}', treating as empty: {e}");
                None
            }
        }
    }

    fn persist(&mut self) {
        let storage_key = self.storage_key.clone();
        let activity_key = self.activity_key.clone();

        let stored: StoredInterestMap = self
            .interests
            .iter()
            .map(|(id, entry)| (id.clone(), entry.clone().into()))
            .collect();
        match serde_json::to_string(&stored) {
            Ok(json) => self.write_key(&storage_key, &json),
            Err(e) => error!("Failed to serialize watchlist: {e}"),
        }
        match serde_json::to_string(&self.activity) {
            Ok(json) => self.write_key(&activity_key, &json),
            Err(e) => error!("Failed to serialize activity log: {e}"),
        }
    }

    fn discard_key(&mut self, key: &str) {
        if let Err(e) = self.persistence.remove(key) {
            error!("Failed to discard unreadable '{key}': {e}");
        }
    }

    fn write_key(&mut self, key: &str, value: &str) {
        if let Err(e) = self.persistence.set(key, value) {
            error!("Failed to persist '{key}', keeping in-memory state: {e}");
        }
    }
}

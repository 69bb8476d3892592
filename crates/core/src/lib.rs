pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use log::{debug, info};
use models::{
    activity::ActivityEvent,
    filter::IpoFilter,
    history::{HistoryFilter, MonthlyBalance, TransactionHistoryItem},
    interest::{InterestedIpo, Investment},
    ipo::Ipo,
    profile::{NotificationPrefs, NotificationPrefsUpdate, Profile, ProfileUpdate},
    settings::TrackerSettings,
    summary::PortfolioOverview,
};
use providers::{http_catalog::HttpCatalog, static_catalog::StaticCatalog, traits::CatalogProvider};
use services::{
    filter_service::FilterService,
    history_service::HistoryService,
    interest_store::{Clock, InterestStore},
    profile_service::ProfileService,
    summary_service::SummaryService,
};
use storage::{manager::SnapshotManager, memory::MemoryStore, traits::KeyValueStore};

use errors::CoreError;

/// Main entry point for the IPO Tracker core library.
/// Holds the catalog, the watchlist store and the services that read them.
#[must_use]
pub struct IpoTracker {
    settings: TrackerSettings,
    catalog_provider: Box<dyn CatalogProvider>,
    catalog: Vec<Ipo>,
    store: InterestStore,
    filter_service: FilterService,
    history_service: HistoryService,
    summary_service: SummaryService,
    profile_service: ProfileService,
}

impl std::fmt::Debug for IpoTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IpoTracker")
            .field("settings", &self.settings)
            .field("catalog_provider", &self.catalog_provider.name())
            .field("catalog", &self.catalog.len())
            .field("store", &self.store)
            .finish()
    }
}

impl IpoTracker {
    /// Open a tracker over `persistence`. The catalog source follows
    /// `settings.catalog_url`: remote when set, built-in otherwise.
    pub fn new(persistence: Box<dyn KeyValueStore>, settings: TrackerSettings) -> Self {
        let catalog_provider: Box<dyn CatalogProvider> = match &settings.catalog_url {
            Some(url) => Box::new(HttpCatalog::new(url.clone())),
            None => Box::new(StaticCatalog::new()),
        };
        let store = InterestStore::open(persistence, &settings);
        Self::build(settings, catalog_provider, store)
    }

    /// Tracker with in-memory persistence and default settings.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()), TrackerSettings::default())
    }

    /// Tracker persisting to a directory of JSON files (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_dir(dir: impl Into<std::path::PathBuf>, settings: TrackerSettings) -> Self {
        Self::new(Box::new(storage::file::FileStore::new(dir)), settings)
    }

    /// Replace the catalog source.
    pub fn with_catalog_provider(mut self, provider: Box<dyn CatalogProvider>) -> Self {
        self.catalog_provider = provider;
        self
    }

    /// Replace the clock used for "today", cache age and activity timestamps.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.store.set_clock(clock);
        self
    }

    // ── Catalog ─────────────────────────────────────────────────────

    /// Fetch the catalog from the configured provider.
    /// Returns the number of IPOs loaded. On error the previous catalog is kept.
    pub async fn load_catalog(&mut self) -> Result<usize, CoreError> {
        let ipos = self.catalog_provider.fetch_ipos().await?;
        info!(
            "Loaded {} IPOs from {} catalog",
            ipos.len(),
            self.catalog_provider.name()
        );
        self.catalog = ipos;
        Ok(self.catalog.len())
    }

    /// Install a catalog directly, bypassing the provider.
    pub fn set_catalog(&mut self, ipos: Vec<Ipo>) {
        self.catalog = ipos;
    }

    #[must_use]
    pub fn catalog(&self) -> &[Ipo] {
        &self.catalog
    }

    #[must_use]
    pub fn find_ipo(&self, ipo_id: &str) -> Option<&Ipo> {
        self.catalog.iter().find(|ipo| ipo.id == ipo_id)
    }

    /// Sector selector options: "All" then each catalog sector.
    #[must_use]
    pub fn sectors(&self) -> Vec<String> {
        self.filter_service.available_sectors(&self.catalog)
    }

    /// Catalog entries matching `filter`, in catalog order.
    #[must_use]
    pub fn filtered_catalog(&self, filter: &IpoFilter) -> Vec<&Ipo> {
        self.filter_service.filter(&self.catalog, filter, self.store.today())
    }

    // ── Watchlist ───────────────────────────────────────────────────

    /// Toggle interest in an IPO. Returns the resulting interest state.
    ///
    /// The snapshot comes from the catalog, or from the watchlist entry when
    /// the IPO has since left the catalog, so a tracked IPO can always be
    /// revoked.
    pub fn toggle_interest(&mut self, ipo_id: &str) -> Result<bool, CoreError> {
        let snapshot = match self.find_ipo(ipo_id) {
            Some(ipo) => ipo.clone(),
            None => self
                .store
                .refreshed()
                .get(ipo_id)
                .map(|entry| entry.ipo.clone())
                .ok_or_else(|| CoreError::IpoNotFound(ipo_id.to_string()))?,
        };
        Ok(self.store.toggle_interest(ipo_id, &snapshot))
    }

    /// Flag every catalog IPO matching `filter`. Returns how many were newly added.
    pub fn mark_all_filtered_as_interested(&mut self, filter: &IpoFilter) -> usize {
        let matching: Vec<Ipo> = self.filtered_catalog(filter).into_iter().cloned().collect();
        debug!("Marking {} filtered IPOs as interested", matching.len());
        self.store.mark_multiple_as_interested(&matching)
    }

    /// Record shares or a cash amount for a flagged IPO. `false` if not flagged.
    pub fn update_investment(&mut self, ipo_id: &str, investment: Investment) -> bool {
        self.store.update_investment(ipo_id, investment)
    }

    /// Flip the listing-day notification of a flagged IPO. `false` if not flagged.
    pub fn toggle_notification(&mut self, ipo_id: &str) -> bool {
        self.store.toggle_notification(ipo_id)
    }

    #[must_use]
    pub fn is_interested(&mut self, ipo_id: &str) -> bool {
        self.store.refreshed().is_interested(ipo_id)
    }

    #[must_use]
    pub fn interested(&mut self) -> Vec<&InterestedIpo> {
        self.store.refreshed().all_interested()
    }

    /// The cache as last loaded, without revalidating.
    #[must_use]
    pub fn store(&self) -> &InterestStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut InterestStore {
        &mut self.store
    }

    /// Mark the cached watchlist stale so the next read reloads it.
    pub fn invalidate(&mut self) {
        self.store.invalidate();
    }

    /// Reload the watchlist if the cache is stale. Returns `true` if it reloaded.
    pub fn refresh(&mut self) -> bool {
        self.store.revalidate()
    }

    // ── History & Summary ───────────────────────────────────────────

    /// History items matching `filter`, newest first.
    #[must_use]
    pub fn history(&mut self, filter: &HistoryFilter) -> Vec<TransactionHistoryItem> {
        let store = self.store.refreshed();
        let items =
            self.history_service
                .build_history(store.all_interested(), store.activity(), store.now());
        self.history_service
            .filter_history(&items, filter)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Six-month balance series for the portfolio chart.
    #[must_use]
    pub fn monthly_balance(&mut self) -> Vec<MonthlyBalance> {
        let store = self.store.refreshed();
        self.history_service
            .monthly_balance(store.all_interested(), store.today())
    }

    /// Recorded watchlist activity, newest first.
    #[must_use]
    pub fn activity_feed(&mut self) -> Vec<&ActivityEvent> {
        self.history_service.activity_feed(self.store.refreshed().activity())
    }

    #[must_use]
    pub fn overview(&mut self) -> PortfolioOverview {
        let store = self.store.refreshed();
        self.summary_service.overview(store, store.today())
    }

    // ── Profile ─────────────────────────────────────────────────────

    pub fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, CoreError> {
        self.profile_service
            .get_profile(self.store.persistence(), user_id)
    }

    pub fn upsert_profile(&mut self, user_id: &str, update: ProfileUpdate) -> Result<Profile, CoreError> {
        let now = self.store.now();
        self.profile_service
            .upsert_profile(self.store.persistence_mut(), user_id, update, now)
    }

    pub fn get_notification_prefs(&self, user_id: &str) -> Result<Option<NotificationPrefs>, CoreError> {
        self.profile_service
            .get_notification_prefs(self.store.persistence(), user_id)
    }

    pub fn update_notification_prefs(
        &mut self,
        user_id: &str,
        update: NotificationPrefsUpdate,
    ) -> Result<NotificationPrefs, CoreError> {
        let now = self.store.now();
        self.profile_service
            .update_notification_prefs(self.store.persistence_mut(), user_id, update, now)
    }

    // ── Backup ──────────────────────────────────────────────────────

    /// Encrypted, portable backup of the watchlist and its activity.
    pub fn export_snapshot(&mut self, password: &str) -> Result<Vec<u8>, CoreError> {
        SnapshotManager::export(&self.store.refreshed().snapshot(), password)
    }

    /// Replace the watchlist with a backup. Returns the number of entries restored.
    pub fn import_snapshot(&mut self, data: &[u8], password: &str) -> Result<usize, CoreError> {
        let snapshot = SnapshotManager::import(data, password)?;
        self.store.restore(snapshot);
        Ok(self.store.len())
    }

    #[must_use]
    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(
        settings: TrackerSettings,
        catalog_provider: Box<dyn CatalogProvider>,
        store: InterestStore,
    ) -> Self {
        Self {
            settings,
            catalog_provider,
            catalog: Vec::new(),
            store,
            filter_service: FilterService::new(),
            history_service: HistoryService::new(),
            summary_service: SummaryService::new(),
            profile_service: ProfileService::new(),
        }
    }
}

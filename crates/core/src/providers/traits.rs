use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::ipo::Ipo;

/// Source of the IPO catalog.
///
/// The tracker only reads from it: catalog records are copied into the
/// watchlist when the user flags them, never written back.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CatalogProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the full list of IPOs, in display order.
    async fn fetch_ipos(&self) -> Result<Vec<Ipo>, CoreError>;
}

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::ipo::Ipo;
use super::traits::CatalogProvider;

/// Catalog served as a JSON array of IPO records over HTTP.
///
/// Expected body: `[{"id": "1", "name": "...", "ticker": "...", "sector": "...",
/// "expectedDate": "2025-01-10", "expectedPrice": "$28-32", "description": "...", ...}]`
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    pub fn new(url: impl Into<String>) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CatalogProvider for HttpCatalog {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn fetch_ipos(&self) -> Result<Vec<Ipo>, CoreError> {
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Catalog {
                provider: self.name().into(),
                message: format!("Catalog endpoint returned HTTP {status}"),
            });
        }

        let ipos: Vec<Ipo> = resp.json().await.map_err(|e| CoreError::Catalog {
            provider: self.name().into(),
            message: format!("Failed to parse catalog response: {e}"),
        })?;

        debug!("Fetched {} IPOs from remote catalog", ipos.len());
        Ok(ipos)
    }
}

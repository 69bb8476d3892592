use async_trait::async_trait;
use chrono::NaiveDate;

use crate::errors::CoreError;
use crate::models::ipo::Ipo;
use super::traits::CatalogProvider;

/// Built-in demo catalog of ten simulated IPOs.
///
/// Two listings (MediPharm Labs and Consumer Brands Inc) are always dated
/// on the catalog's "today" so the Today filter has something to show.
pub struct StaticCatalog {
    today: Option<NaiveDate>,
}

impl StaticCatalog {
    /// Catalog whose "today" listings follow the current UTC date.
    pub fn new() -> Self {
        Self { today: None }
    }

    /// Catalog pinned to a fixed "today" (deterministic tests, demos).
    pub fn as_of(today: NaiveDate) -> Self {
        Self { today: Some(today) }
    }

    /// Build the catalog synchronously.
    pub fn ipos(&self) -> Vec<Ipo> {
        let today = self.today.unwrap_or_else(|| chrono::Utc::now().date_naive());
        let date = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap_or(today);

        vec![
            Ipo::new("1", "MediPharm Labs", "MEDI", "Medicine", today, "$18-22")
                .with_description("Pharmaceutical innovations."),
            Ipo::new("2", "TechVision AI", "TVIA", "Technology", date(2024, 12, 15), "$45-50")
                .with_description("AI-powered vision."),
            Ipo::new("3", "GreenEnergy Solutions", "GRNS", "Energy", date(2025, 1, 10), "$28-32")
                .with_description("Renewable energy."),
            Ipo::new("4", "FinTech Innovations", "FNTI", "Finance", date(2025, 3, 5), "$35-40")
                .with_description("Digital banking."),
            Ipo::new("5", "Consumer Brands Inc", "CBRN", "Consumer", today, "$22-26")
                .with_description("Sustainable goods."),
            Ipo::new("6", "Industrial Automation", "IAUT", "Industrial", date(2025, 4, 10), "$30-35")
                .with_description("Factory automation."),
            Ipo::new("7", "QuantumCompute", "QNTM", "Technology", date(2025, 5, 15), "$60-65")
                .with_description("Quantum computing."),
            Ipo::new("8", "AgriTech Farms", "AGTF", "Agriculture", date(2025, 6, 1), "$18-22")
                .with_description("Smart farming."),
            Ipo::new("9", "CyberShield Security", "CYBS", "Technology", date(2025, 7, 10), "$32-36")
                .with_description("Cybersecurity solutions."),
            Ipo::new("10", "BioGenetics Research", "BIOG", "Medicine", date(2025, 8, 20), "$40-45")
                .with_description("Gene therapy."),
        ]
    }
}

impl Default for StaticCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CatalogProvider for StaticCatalog {
    fn name(&self) -> &str {
        "Static"
    }

    async fn fetch_ipos(&self) -> Result<Vec<Ipo>, CoreError> {
        Ok(self.ipos())
    }
}

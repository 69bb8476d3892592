// ═══════════════════════════════════════════════════════════════════
// Provider Tests — built-in catalog, HTTP catalog, trait objects
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use chrono::NaiveDate;
use ipo_tracker_core::errors::CoreError;
use ipo_tracker_core::models::ipo::Ipo;
use ipo_tracker_core::providers::http_catalog::HttpCatalog;
use ipo_tracker_core::providers::static_catalog::StaticCatalog;
use ipo_tracker_core::providers::traits::CatalogProvider;
use std::collections::HashSet;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

struct FailingCatalog;

#[async_trait]
impl CatalogProvider for FailingCatalog {
    fn name(&self) -> &str {
        "Failing"
    }

    async fn fetch_ipos(&self) -> Result<Vec<Ipo>, CoreError> {
        Err(CoreError::Catalog {
            provider: self.name().into(),
            message: "service unavailable".into(),
        })
    }
}

// ═══════════════════════════════════════════════════════════════════
//  StaticCatalog
// ═══════════════════════════════════════════════════════════════════

mod static_catalog {
    use super::*;

    #[test]
    fn ten_ipos_with_unique_ids() {
        let ipos = StaticCatalog::as_of(d(2025, 1, 15)).ipos();
        assert_eq!(ipos.len(), 10);
        let unique: HashSet<&str> = ipos.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(unique.len(), 10);
    }

    #[test]
    fn two_listings_follow_today() {
        let today = d(2025, 6, 30);
        let ipos = StaticCatalog::as_of(today).ipos();
        let on_today: Vec<&str> = ipos
            .iter()
            .filter(|i| i.expected_date == today)
            .map(|i| i.ticker.as_str())
            .collect();
        assert_eq!(on_today, vec!["MEDI", "CBRN"]);
    }

    #[test]
    fn fixed_listing_dates() {
        let ipos = StaticCatalog::as_of(d(2025, 1, 15)).ipos();
        let qntm = ipos.iter().find(|i| i.ticker == "QNTM").unwrap();
        assert_eq!(qntm.expected_date, d(2025, 5, 15));
        assert_eq!(qntm.expected_price, "$60-65");
        assert_eq!(qntm.sector, "Technology");
    }

    #[test]
    fn every_price_parses() {
        for ipo in StaticCatalog::as_of(d(2025, 1, 15)).ipos() {
            assert!(ipo.average_price().is_some(), "{} has no price", ipo.ticker);
            assert!(!ipo.description.is_empty());
            assert!(!ipo.logo.is_empty());
        }
    }

    #[tokio::test]
    async fn fetch_matches_sync_list() {
        let catalog = StaticCatalog::as_of(d(2025, 1, 15));
        assert_eq!(catalog.name(), "Static");
        assert_eq!(catalog.fetch_ipos().await.unwrap(), catalog.ipos());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  HttpCatalog
// ═══════════════════════════════════════════════════════════════════

mod http_catalog {
    use super::*;

    #[test]
    fn name_and_url() {
        let catalog = HttpCatalog::new("https://example.test/ipos.json");
        assert_eq!(catalog.name(), "HTTP");
        assert_eq!(catalog.url(), "https://example.test/ipos.json");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_error() {
        // Port 9 on localhost: nothing listens there in CI
        let catalog = HttpCatalog::new("http://127.0.0.1:9/ipos.json?token=secret");
        let err = catalog.fetch_ipos().await.unwrap_err();
        assert!(matches!(err, CoreError::Network(_)));
        assert!(!err.to_string().contains("secret"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Trait objects
// ═══════════════════════════════════════════════════════════════════

mod trait_objects {
    use super::*;

    #[tokio::test]
    async fn providers_are_interchangeable() {
        let providers: Vec<Box<dyn CatalogProvider>> = vec![
            Box::new(StaticCatalog::as_of(d(2025, 1, 15))),
            Box::new(FailingCatalog),
        ];

        let mut loaded = Vec::new();
        for p in &providers {
            loaded.push((p.name().to_string(), p.fetch_ipos().await.map(|v| v.len())));
        }

        assert_eq!(loaded[0].0, "Static");
        assert_eq!(loaded[0].1.as_ref().unwrap(), &10);
        assert_eq!(loaded[1].0, "Failing");
        assert!(matches!(loaded[1].1, Err(CoreError::Catalog { .. })));
    }
}

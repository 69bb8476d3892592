use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An upcoming (or recently listed) IPO as supplied by a catalog provider.
///
/// Catalog records are read-only from the tracker's point of view: the
/// watchlist copies them, it never edits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ipo {
    /// Catalog identifier (e.g., "1", "42")
    pub id: String,

    /// Company name (e.g., "MediPharm Labs")
    pub name: String,

    /// Expected ticker symbol (e.g., "MEDI")
    pub ticker: String,

    /// Industry sector (e.g., "Medicine", "Technology")
    pub sector: String,

    /// Expected listing date (daily granularity)
    pub expected_date: NaiveDate,

    /// Textual price range as published (e.g., "$18-22")
    pub expected_price: String,

    pub description: String,

    /// Single-glyph logo placeholder (e.g., "M")
    #[serde(default)]
    pub logo: String,

    // ── Extended details (optional) ─────────────────────────────────
    #[serde(default)]
    pub valuation: Option<String>,
    #[serde(default)]
    pub founded_year: Option<String>,
    #[serde(default)]
    pub headquarters: Option<String>,
    #[serde(default)]
    pub ceo: Option<String>,
    #[serde(default)]
    pub employees: Option<u64>,
    #[serde(default)]
    pub revenue: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub competitors: Vec<String>,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    #[serde(default)]
    pub use_of_proceeds: Option<String>,
}

impl Ipo {
    /// Create a catalog record with the required fields; extended details empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        ticker: impl Into<String>,
        sector: impl Into<String>,
        expected_date: NaiveDate,
        expected_price: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let logo = name.chars().next().map(|c| c.to_string()).unwrap_or_default();
        Self {
            id: id.into(),
            name,
            ticker: ticker.into().to_uppercase(),
            sector: sector.into(),
            expected_date,
            expected_price: expected_price.into(),
            description: String::new(),
            logo,
            valuation: None,
            founded_year: None,
            headquarters: None,
            ceo: None,
            employees: None,
            revenue: None,
            website: None,
            competitors: Vec::new(),
            risk_factors: Vec::new(),
            use_of_proceeds: None,
        }
    }

    /// Builder-style description setter.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Every number found in the price range text, in order.
    ///
    /// `"$18-22"` → `[18.0, 22.0]`, `"$45"` → `[45.0]`, `"TBD"` → `[]`.
    /// The dash between bounds is a separator, never a sign. A comma between
    /// two digits groups thousands (`"$1,200-1,500"` → `[1200.0, 1500.0]`).
    pub fn price_bounds(&self) -> Vec<f64> {
        let chars: Vec<char> = self.expected_price.chars().collect();
        let text: String = chars
            .iter()
            .enumerate()
            .filter(|&(i, &c)| {
                let grouping = c == ','
                    && i > 0
                    && chars[i - 1].is_ascii_digit()
                    && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
                !grouping
            })
            .map(|(_, &c)| c)
            .collect();
        text.split(|c: char| !(c.is_ascii_digit() || c == '.'))
            .filter(|token| !token.is_empty())
            .filter_map(|token| token.parse::<f64>().ok())
            .collect()
    }

    /// Mid-point of the published price range, or `None` if it has no numbers.
    pub fn average_price(&self) -> Option<f64> {
        let bounds = self.price_bounds();
        if bounds.is_empty() {
            return None;
        }
        Some(bounds.iter().sum::<f64>() / bounds.len() as f64)
    }
}

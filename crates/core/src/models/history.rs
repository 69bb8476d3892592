use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Category of a history item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Interest,
    Investment,
    Notification,
}

impl TransactionType {
    /// Prefix used in item ids (e.g., "interest-7").
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Interest => "interest",
            TransactionType::Investment => "investment",
            TransactionType::Notification => "notification",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the transaction-history view.
///
/// Derived from the current watchlist on every read; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionHistoryItem {
    /// `"{type}-{ipo_id}"`
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Display label (e.g., "Marked Interest")
    pub action: String,
    pub ticker: String,
    pub name: String,
    pub details: String,
    pub ipo_date: NaiveDate,
}

/// Type selector of the history filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryTypeFilter {
    #[default]
    All,
    Only(TransactionType),
}

/// Secondary filter applied to history items. All active dimensions must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub kind: HistoryTypeFilter,
    /// Case-insensitive substring matched against ticker, name and details
    pub search: String,
}

impl HistoryFilter {
    pub fn new(kind: HistoryTypeFilter, search: impl Into<String>) -> Self {
        Self {
            kind,
            search: search.into(),
        }
    }

    pub fn matches(&self, item: &TransactionHistoryItem) -> bool {
        let matches_type = match self.kind {
            HistoryTypeFilter::All => true,
            HistoryTypeFilter::Only(kind) => item.kind == kind,
        };
        if !matches_type {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let q = self.search.to_lowercase();
        item.ticker.to_lowercase().contains(&q)
            || item.name.to_lowercase().contains(&q)
            || item.details.to_lowercase().contains(&q)
    }
}

/// A monthly point on the balance chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBalance {
    /// Short month name (e.g., "Jan")
    pub name: String,
    /// Last calendar day of the month
    pub month_end: NaiveDate,
    pub value: f64,
    /// `true` for the month containing "today"
    pub current: bool,
}

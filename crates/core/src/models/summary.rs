use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Headline numbers for the portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioOverview {
    /// Date the past/upcoming split was computed for
    pub as_of: NaiveDate,

    /// Investment value of past (already listed) IPOs
    pub total_investment: f64,

    /// Number of IPOs on the watchlist
    pub tracked_count: usize,

    /// Watchlist IPOs listed before `as_of`
    pub past_count: usize,

    /// Watchlist IPOs listing on or after `as_of`
    pub upcoming_count: usize,

    /// Watchlist IPOs with a listing-day notification
    pub notifications_enabled: usize,
}

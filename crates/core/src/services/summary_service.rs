use chrono::NaiveDate;

use crate::models::summary::PortfolioOverview;
use crate::services::interest_store::InterestStore;

/// Headline statistics over the watchlist.
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    pub fn overview(&self, store: &InterestStore, today: NaiveDate) -> PortfolioOverview {
        let all = store.all_interested();
        let past_count = all.iter().filter(|e| e.ipo.expected_date < today).count();

        PortfolioOverview {
            as_of: today,
            total_investment: store.calculate_total_investment_as_of(today),
            tracked_count: all.len(),
            past_count,
            upcoming_count: all.len() - past_count,
            notifications_enabled: all.iter().filter(|e| e.notify_on_date).count(),
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}

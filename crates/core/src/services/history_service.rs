use chrono::{DateTime, NaiveDate, Utc};

use crate::models::activity::{ActivityEvent, ActivityKind};
use crate::models::history::{HistoryFilter, MonthlyBalance, TransactionHistoryItem, TransactionType};
use crate::models::interest::{InterestedIpo, Investment};
use crate::services::dates;

/// Number of months shown on the balance chart.
pub const BALANCE_MONTHS: u32 = 6;

/// Builds the transaction-history view from the current watchlist.
///
/// The watchlist only holds current state, so items are reconstructed on
/// every read: one per flagged IPO, one per populated investment and one per
/// enabled notification. Each item is stamped with the latest recorded
/// activity of its kind, or with `generated_at` when none was recorded.
pub struct HistoryService;

impl HistoryService {
    pub fn new() -> Self {
        Self
    }

    /// Derive history items, newest first. Ties keep watchlist order.
    pub fn build_history<'a>(
        &self,
        interests: impl IntoIterator<Item = &'a InterestedIpo>,
        activity: &[ActivityEvent],
        generated_at: DateTime<Utc>,
    ) -> Vec<TransactionHistoryItem> {
        let mut items = Vec::new();

        for entry in interests.into_iter().filter(|e| e.interested) {
            let ipo = &entry.ipo;
            let stamp = |kind: ActivityKind| {
                Self::last_recorded(activity, &ipo.id, kind).unwrap_or(generated_at)
            };
            let item = |kind: TransactionType, action: &str, details: String, date: DateTime<Utc>| {
                TransactionHistoryItem {
                    id: format!("{}-{}", kind.as_str(), ipo.id),
                    date,
                    kind,
                    action: action.to_string(),
                    ticker: ipo.ticker.clone(),
                    name: ipo.name.clone(),
                    details,
                    ipo_date: ipo.expected_date,
                }
            };

            items.push(item(
                TransactionType::Interest,
                "Marked Interest",
                format!("Marked interest in {} IPO", ipo.name),
                stamp(ActivityKind::InterestMarked),
            ));

            if let Some(details) = entry.investment.as_ref().and_then(Self::investment_details) {
                items.push(item(
                    TransactionType::Investment,
                    "Investment",
                    details,
                    stamp(ActivityKind::InvestmentUpdated),
                ));
            }

            if entry.notify_on_date {
                items.push(item(
                    TransactionType::Notification,
                    "Set Notification",
                    format!(
                        "Enabled notification for {} IPO on {}",
                        ipo.name,
                        ipo.expected_date.format("%b %-d, %Y")
                    ),
                    stamp(ActivityKind::NotificationEnabled),
                ));
            }
        }

        // sort_by is stable: equal timestamps keep generation order
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }

    /// Apply a history filter. Pure; keeps input order.
    pub fn filter_history<'a>(
        &self,
        items: &'a [TransactionHistoryItem],
        filter: &HistoryFilter,
    ) -> Vec<&'a TransactionHistoryItem> {
        items.iter().filter(|item| filter.matches(item)).collect()
    }

    /// Cumulative investment value at the end of each of the last six
    /// months (oldest first). An IPO counts from the month it lists in.
    pub fn monthly_balance<'a>(
        &self,
        interests: impl IntoIterator<Item = &'a InterestedIpo>,
        today: NaiveDate,
    ) -> Vec<MonthlyBalance> {
        let invested: Vec<&InterestedIpo> = interests
            .into_iter()
            .filter(|e| e.interested && e.investment.is_some())
            .collect();

        (0..BALANCE_MONTHS)
            .rev()
            .map(|back| {
                let month = dates::months_back(today, back);
                let month_end = dates::month_end(month);
                let value = invested
                    .iter()
                    .filter(|e| e.ipo.expected_date <= month_end)
                    .map(|e| e.investment_value())
                    .sum::<f64>();
                MonthlyBalance {
                    name: month.format("%b").to_string(),
                    month_end,
                    value,
                    current: back == 0,
                }
            })
            .collect()
    }

    /// Recorded activity, newest first.
    pub fn activity_feed<'a>(&self, activity: &'a [ActivityEvent]) -> Vec<&'a ActivityEvent> {
        let mut feed: Vec<&ActivityEvent> = activity.iter().collect();
        feed.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        feed
    }

    fn investment_details(investment: &Investment) -> Option<String> {
        if let Some(shares) = investment.populated_shares() {
            Some(format!("Invested in {shares} shares"))
        } else {
            investment
                .populated_amount()
                .map(|amount| format!("Invested ${amount:.2}"))
        }
    }

    fn last_recorded(activity: &[ActivityEvent], ipo_id: &str, kind: ActivityKind) -> Option<DateTime<Utc>> {
        activity
            .iter()
            .rev()
            .find(|e| e.ipo_id == ipo_id && e.kind == kind)
            .map(|e| e.occurred_at)
    }
}

impl Default for HistoryService {
    fn default() -> Self {
        Self::new()
    }
}

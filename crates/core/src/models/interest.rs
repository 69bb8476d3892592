use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ipo::Ipo;

/// A simulated position in an IPO: either a share count or a cash amount.
///
/// Updates replace the whole value, so in practice only one field is set.
/// No magnitude validation is applied; zero and negative values are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    #[serde(default)]
    pub shares: Option<f64>,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl Investment {
    pub fn with_shares(shares: f64) -> Self {
        Self {
            shares: Some(shares),
            amount: None,
        }
    }

    pub fn with_amount(amount: f64) -> Self {
        Self {
            shares: None,
            amount: Some(amount),
        }
    }

    /// Share count, if set to something other than zero.
    pub fn populated_shares(&self) -> Option<f64> {
        self.shares.filter(|s| *s != 0.0)
    }

    /// Cash amount, if set to something other than zero.
    pub fn populated_amount(&self) -> Option<f64> {
        self.amount.filter(|a| *a != 0.0)
    }

    pub fn is_populated(&self) -> bool {
        self.populated_shares().is_some() || self.populated_amount().is_some()
    }

    /// Value of this position given the IPO's average offer price.
    ///
    /// Shares take precedence over amount. Shares with an unknown price are worth 0.
    pub fn value_at(&self, average_price: Option<f64>) -> f64 {
        if let Some(shares) = self.populated_shares() {
            return average_price.map(|p| shares * p).unwrap_or(0.0);
        }
        self.populated_amount().unwrap_or(0.0)
    }
}

/// An IPO on the user's watchlist, with its per-IPO sub-state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestedIpo {
    /// Catalog snapshot taken when the IPO was flagged (or last bulk-marked)
    pub ipo: Ipo,

    /// Always `true` for stored entries; revoked entries are deleted
    pub interested: bool,

    #[serde(default)]
    pub investment: Option<Investment>,

    #[serde(default)]
    pub notify_on_date: bool,
}

impl InterestedIpo {
    pub fn new(ipo: Ipo) -> Self {
        Self {
            ipo,
            interested: true,
            investment: None,
            notify_on_date: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.ipo.id
    }

    /// Current value of the investment, 0 when there is none.
    pub fn investment_value(&self) -> f64 {
        self.investment
            .as_ref()
            .map(|inv| inv.value_at(self.ipo.average_price()))
            .unwrap_or(0.0)
    }
}

/// The watchlist: IPO id → entry. At most one entry per id.
pub type InterestMap = BTreeMap<String, InterestedIpo>;

/// Persisted shape of a watchlist entry: the IPO fields inline next to the
/// sub-state (`{ "id": .., "name": .., "interested": true, .. }`).
///
/// Only the JSON store uses this. Backups keep [`InterestedIpo`] because
/// bincode cannot read flattened structs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredInterest {
    #[serde(flatten)]
    pub ipo: Ipo,

    pub interested: bool,

    #[serde(default)]
    pub investment: Option<Investment>,

    #[serde(default)]
    pub notify_on_date: bool,
}

impl From<InterestedIpo> for StoredInterest {
    fn from(entry: InterestedIpo) -> Self {
        Self {
            ipo: entry.ipo,
            interested: entry.interested,
            investment: entry.investment,
            notify_on_date: entry.notify_on_date,
        }
    }
}

impl From<StoredInterest> for InterestedIpo {
    fn from(stored: StoredInterest) -> Self {
        Self {
            ipo: stored.ipo,
            interested: stored.interested,
            investment: stored.investment,
            notify_on_date: stored.notify_on_date,
        }
    }
}

/// The watchlist as written to persistence under the storage key.
pub type StoredInterestMap = BTreeMap<String, StoredInterest>;

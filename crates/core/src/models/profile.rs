use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTolerance {
    Conservative,
    Moderate,
    Aggressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvestmentHorizon {
    #[serde(rename = "Less than 5 years")]
    UnderFiveYears,
    #[serde(rename = "5-10 years")]
    FiveToTenYears,
    #[serde(rename = "10+ years")]
    OverTenYears,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeBracket {
    #[serde(rename = "Under $50,000")]
    Under50k,
    #[serde(rename = "$50,000 - $100,000")]
    From50kTo100k,
    #[serde(rename = "$100,000 - $200,000")]
    From100kTo200k,
    #[serde(rename = "$200,000+")]
    Over200k,
}

/// Investor profile attached to a user id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub user_id: String,
    #[serde(default)]
    pub risk_tolerance: Option<RiskTolerance>,
    #[serde(default)]
    pub investment_horizon: Option<InvestmentHorizon>,
    #[serde(default)]
    pub income_bracket: Option<IncomeBracket>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement payload for a profile. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub risk_tolerance: RiskTolerance,
    pub investment_horizon: InvestmentHorizon,
    pub income_bracket: IncomeBracket,
}

/// Per-user notification channel switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefs {
    pub user_id: String,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub ipo_reminders: bool,
    pub market_updates: bool,
    pub portfolio_alerts: bool,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPrefsUpdate {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub ipo_reminders: bool,
    pub market_updates: bool,
    pub portfolio_alerts: bool,
}

impl NotificationPrefsUpdate {
    /// Number of channels switched on.
    pub fn enabled_count(&self) -> usize {
        [
            self.email_notifications,
            self.push_notifications,
            self.ipo_reminders,
            self.market_updates,
            self.portfolio_alerts,
        ]
        .iter()
        .filter(|on| **on)
        .count()
    }
}

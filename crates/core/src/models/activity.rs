use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What happened to a watchlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    InterestMarked,
    InterestRemoved,
    InvestmentUpdated,
    NotificationEnabled,
    NotificationDisabled,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::InterestMarked => write!(f, "Marked Interest"),
            ActivityKind::InterestRemoved => write!(f, "Removed Interest"),
            ActivityKind::InvestmentUpdated => write!(f, "Updated Investment"),
            ActivityKind::NotificationEnabled => write!(f, "Enabled Notification"),
            ActivityKind::NotificationDisabled => write!(f, "Disabled Notification"),
        }
    }
}

/// A recorded watchlist mutation with the time it actually occurred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEvent {
    pub id: Uuid,
    pub ipo_id: String,
    pub kind: ActivityKind,
    pub occurred_at: DateTime<Utc>,
}

impl ActivityEvent {
    pub fn new(ipo_id: impl Into<String>, kind: ActivityKind, occurred_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            ipo_id: ipo_id.into(),
            kind,
            occurred_at,
        }
    }
}

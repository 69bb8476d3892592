use serde::{Deserialize, Serialize};

use super::activity::ActivityEvent;
use super::interest::InterestMap;

/// Everything that gets serialized, encrypted and written to a portable
/// `.ipot` backup: the watchlist and its recorded activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub interests: InterestMap,

    #[serde(default)]
    pub activity: Vec<ActivityEvent>,
}

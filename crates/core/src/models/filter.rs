use chrono::NaiveDate;

/// Sector selector. `All` is the pass-through sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SectorFilter {
    #[default]
    All,
    Named(String),
}

impl SectorFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Build from a selector label; `"All"` maps to the sentinel.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        if label == Self::ALL_LABEL {
            SectorFilter::All
        } else {
            SectorFilter::Named(label)
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SectorFilter::All => Self::ALL_LABEL,
            SectorFilter::Named(s) => s,
        }
    }
}

/// Listing-date window relative to "today".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DatePeriod {
    #[default]
    All,
    Today,
    /// Sunday through Saturday of the current week
    ThisWeek,
    ThisMonth,
    NextMonth,
    /// A single user-chosen calendar day
    Custom(NaiveDate),
}

impl DatePeriod {
    /// Selector label (e.g., "This Week").
    pub fn label(&self) -> &'static str {
        match self {
            DatePeriod::All => "All",
            DatePeriod::Today => "Today",
            DatePeriod::ThisWeek => "This Week",
            DatePeriod::ThisMonth => "This Month",
            DatePeriod::NextMonth => "Next Month",
            DatePeriod::Custom(_) => "Custom",
        }
    }

    /// Parse a selector label. `"Custom"` needs the chosen day.
    pub fn from_label(label: &str, custom_date: Option<NaiveDate>) -> Option<Self> {
        match label {
            "All" => Some(DatePeriod::All),
            "Today" => Some(DatePeriod::Today),
            "This Week" => Some(DatePeriod::ThisWeek),
            "This Month" => Some(DatePeriod::ThisMonth),
            "Next Month" => Some(DatePeriod::NextMonth),
            "Custom" => custom_date.map(DatePeriod::Custom),
            _ => None,
        }
    }

    /// Selector options in display order.
    pub fn labels() -> [&'static str; 6] {
        ["All", "Today", "This Week", "This Month", "Next Month", "Custom"]
    }
}

impl std::fmt::Display for DatePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The three independent catalog filter dimensions. Combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpoFilter {
    pub sector: SectorFilter,
    pub period: DatePeriod,
    /// Case-insensitive substring over name, ticker, description and sector
    pub search: String,
}

impl IpoFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = SectorFilter::from_label(sector);
        self
    }

    pub fn period(mut self, period: DatePeriod) -> Self {
        self.period = period;
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restore every dimension to its pass-through value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `true` if no dimension narrows the catalog.
    pub fn is_pass_through(&self) -> bool {
        self.sector == SectorFilter::All && self.period == DatePeriod::All && self.search.is_empty()
    }

    /// Page title describing the active filters
    /// (e.g., "Upcoming IPOs - Technology - This Week - Search: ai").
    pub fn title(&self) -> String {
        let mut title = String::from("Upcoming IPOs");
        if let SectorFilter::Named(sector) = &self.sector {
            title.push_str(" - ");
            title.push_str(sector);
        }
        if self.period != DatePeriod::All {
            title.push_str(" - ");
            title.push_str(self.period.label());
        }
        if !self.search.is_empty() {
            title.push_str(" - Search: ");
            title.push_str(&self.search);
        }
        title
    }
}

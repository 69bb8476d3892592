use chrono::{Months, NaiveDate};
use std::collections::BTreeSet;

use crate::models::filter::{DatePeriod, IpoFilter, SectorFilter};
use crate::models::ipo::Ipo;
use crate::services::dates;

/// Narrows the IPO catalog by sector, listing-date window and free text.
///
/// Pure business logic, no I/O. All comparisons are day-granular.
pub struct FilterService;

impl FilterService {
    pub fn new() -> Self {
        Self
    }

    /// IPOs matching every active dimension of `filter`, in catalog order.
    pub fn filter<'a>(&self, catalog: &'a [Ipo], filter: &IpoFilter, today: NaiveDate) -> Vec<&'a Ipo> {
        catalog
            .iter()
            .filter(|ipo| self.matches(ipo, filter, today))
            .collect()
    }

    pub fn matches(&self, ipo: &Ipo, filter: &IpoFilter, today: NaiveDate) -> bool {
        Self::matches_sector(ipo, &filter.sector)
            && Self::matches_search(ipo, &filter.search)
            && Self::matches_period(ipo.expected_date, filter.period, today)
    }

    /// `"All"` followed by each distinct sector of the catalog, alphabetically.
    pub fn available_sectors(&self, catalog: &[Ipo]) -> Vec<String> {
        let unique: BTreeSet<&str> = catalog.iter().map(|ipo| ipo.sector.as_str()).collect();
        std::iter::once(SectorFilter::ALL_LABEL)
            .chain(unique)
            .map(str::to_string)
            .collect()
    }

    fn matches_sector(ipo: &Ipo, sector: &SectorFilter) -> bool {
        match sector {
            SectorFilter::All => true,
            SectorFilter::Named(name) => &ipo.sector == name,
        }
    }

    fn matches_search(ipo: &Ipo, search: &str) -> bool {
        if search.is_empty() {
            return true;
        }
        let q = search.to_lowercase();
        ipo.name.to_lowercase().contains(&q)
            || ipo.ticker.to_lowercase().contains(&q)
            || ipo.description.to_lowercase().contains(&q)
            || ipo.sector.to_lowercase().contains(&q)
    }

    fn matches_period(date: NaiveDate, period: DatePeriod, today: NaiveDate) -> bool {
        match period {
            DatePeriod::All => true,
            DatePeriod::Today => date == today,
            DatePeriod::Custom(day) => date == day,
            DatePeriod::ThisWeek => {
                let (start, end) = dates::week_bounds(today);
                date >= start && date <= end
            }
            DatePeriod::ThisMonth => dates::same_month(date, today),
            DatePeriod::NextMonth => dates::month_start(today)
                .checked_add_months(Months::new(1))
                .is_some_and(|next| dates::same_month(date, next)),
        }
    }
}

impl Default for FilterService {
    fn default() -> Self {
        Self::new()
    }
}

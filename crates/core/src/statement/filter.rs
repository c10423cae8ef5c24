//! Time-window, currency, and text filters over the voucher set.

use caravel_shared::types::Currency;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::voucher::Voucher;

/// Currency restriction for a statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyFilter {
    /// No currency restriction.
    #[default]
    All,
    /// Exact match against the voucher currency.
    Only(Currency),
}

impl std::str::FromStr for CurrencyFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ALL") {
            Ok(Self::All)
        } else {
            s.parse::<Currency>().map(Self::Only)
        }
    }
}

/// Voucher filters, as submitted by the back-office UI.
///
/// Month selections hold 1-based month numbers as strings; an empty selection
/// or one containing the `""` sentinel means "no restriction", not "match
/// nothing". All predicates are AND-combined, except that the year filter
/// accepts a match on either the creation or the arrival year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementFilters {
    /// Creation month multi-select.
    pub months: Vec<String>,
    /// Year filter; empty disables it.
    pub year: String,
    /// Currency restriction.
    pub currency: CurrencyFilter,
    /// Arrival month multi-select.
    pub arrival_months: Vec<String>,
    /// Case-insensitive substring search over voucher number and client name.
    pub search: String,
}

impl StatementFilters {
    /// Creates a new unrestricted filter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a year.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Restricts creation months.
    #[must_use]
    pub fn with_months(mut self, months: Vec<String>) -> Self {
        self.months = months;
        self
    }

    /// Restricts arrival months.
    #[must_use]
    pub fn with_arrival_months(mut self, months: Vec<String>) -> Self {
        self.arrival_months = months;
        self
    }

    /// Restricts to a currency.
    #[must_use]
    pub const fn with_currency(mut self, currency: CurrencyFilter) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }
}

/// Returns true if a month selection actually restricts anything.
fn selection_active(selection: &[String]) -> bool {
    !selection.is_empty() && !selection.iter().any(String::is_empty)
}

fn month_selected(selection: &[String], date: DateTime<Utc>) -> bool {
    selection.contains(&date.month().to_string())
}

fn passes(voucher: &Voucher, filters: &StatementFilters) -> bool {
    // Year matches on creation OR arrival, so a voucher created in December
    // but arriving in January stays visible under either year.
    if !filters.year.is_empty() {
        let created = voucher.created_at.year().to_string() == filters.year;
        let arrives = voucher
            .arrival_date
            .is_some_and(|date| date.year().to_string() == filters.year);
        if !created && !arrives {
            return false;
        }
    }

    if selection_active(&filters.months) && !month_selected(&filters.months, voucher.created_at) {
        return false;
    }

    if selection_active(&filters.arrival_months) {
        let arrives = voucher
            .arrival_date
            .is_some_and(|date| month_selected(&filters.arrival_months, date));
        if !arrives {
            return false;
        }
    }

    if let CurrencyFilter::Only(currency) = filters.currency {
        // A voucher with no usable currency never matches a specific filter.
        if voucher.currency != Some(currency) {
            return false;
        }
    }

    if !filters.search.is_empty() {
        let needle = filters.search.to_lowercase();
        let number = voucher.voucher_number.to_string();
        if !number.contains(&needle) && !voucher.client_name.to_lowercase().contains(&needle) {
            return false;
        }
    }

    true
}

/// Applies the filter set, returning the vouchers that pass every predicate.
#[must_use]
pub fn apply_filters(vouchers: &[Voucher], filters: &StatementFilters) -> Vec<Voucher> {
    vouchers
        .iter()
        .filter(|voucher| passes(voucher, filters))
        .cloned()
        .collect()
}

//! Filter option derivation.
//!
//! The back-office UI builds its year and currency dropdowns from the
//! fetched voucher set rather than hard-coding them; this module derives
//! those options. Month options are the fixed 1-12 set and need none.

use std::collections::BTreeSet;

use caravel_shared::types::Currency;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::voucher::Voucher;

/// Selectable filter options derived from a voucher set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Distinct years across creation and arrival dates, newest first.
    pub years: Vec<String>,
    /// Distinct observed currencies, ascending.
    pub currencies: Vec<Currency>,
}

/// Derives the selectable filter options from a voucher set.
#[must_use]
pub fn derive_filter_options(vouchers: &[Voucher]) -> FilterOptions {
    let mut years: BTreeSet<i32> = BTreeSet::new();
    let mut currencies: BTreeSet<Currency> = BTreeSet::new();

    for voucher in vouchers {
        years.insert(voucher.created_at.year());
        if let Some(arrival) = voucher.arrival_date {
            years.insert(arrival.year());
        }
        if let Some(currency) = voucher.currency {
            currencies.insert(currency);
        }
    }

    FilterOptions {
        years: years.into_iter().rev().map(|year| year.to_string()).collect(),
        currencies: currencies.into_iter().collect(),
    }
}

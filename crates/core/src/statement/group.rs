//! Currency partitioning.

use std::collections::BTreeMap;

use caravel_shared::types::Currency;

use crate::voucher::Voucher;

use super::filter::CurrencyFilter;

/// Partitions vouchers by currency.
///
/// With a specific currency filter the result is a single bucket holding the
/// given vouchers (they already passed that filter). With `All`, vouchers are
/// bucketed by their own currency, defaulting unset currency to USD. Buckets
/// are homogeneous by construction, which is what keeps downstream totals
/// from ever summing across currencies.
#[must_use]
pub fn group_by_currency(
    vouchers: &[Voucher],
    filter: CurrencyFilter,
) -> BTreeMap<Currency, Vec<Voucher>> {
    let mut groups: BTreeMap<Currency, Vec<Voucher>> = BTreeMap::new();

    match filter {
        CurrencyFilter::Only(currency) => {
            groups.insert(currency, vouchers.to_vec());
        }
        CurrencyFilter::All => {
            for voucher in vouchers {
                groups
                    .entry(voucher.currency_or_default())
                    .or_default()
                    .push(voucher.clone());
            }
        }
    }

    groups
}

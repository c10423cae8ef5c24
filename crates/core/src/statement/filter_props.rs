//! Property-based tests for statement filters and currency grouping.

use caravel_shared::types::{Currency, VoucherId};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::voucher::{TripCharges, Voucher};

use super::filter::{CurrencyFilter, StatementFilters, apply_filters};
use super::group::group_by_currency;

fn currency_strategy() -> impl Strategy<Value = Option<Currency>> {
    prop_oneof![
        Just(None),
        Just(Some(Currency::Usd)),
        Just(Some(Currency::Eur)),
        Just(Some(Currency::Try)),
        Just(Some(Currency::Gbp)),
    ]
}

fn voucher_strategy() -> impl Strategy<Value = Voucher> {
    (
        "[a-z0-9]{8}",
        1i64..100_000,
        2020i32..2027,
        1u32..=12,
        proptest::option::of((2020i32..2027, 1u32..=12)),
        currency_strategy(),
    )
        .prop_map(|(id, number, year, month, arrival, currency)| Voucher {
            id: VoucherId::new(id),
            voucher_number: number,
            client_name: "Client".to_string(),
            office_name: None,
            currency,
            total_amount: Decimal::ZERO,
            created_at: Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap(),
            arrival_date: arrival
                .map(|(y, m)| Utc.with_ymd_and_hms(y, m, 5, 0, 0, 0).unwrap()),
            hotels: Vec::new(),
            transfers: Vec::new(),
            flights: Vec::new(),
            trips: TripCharges::None,
        })
}

fn vouchers_strategy() -> impl Strategy<Value = Vec<Voucher>> {
    prop::collection::vec(voucher_strategy(), 0..30)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// An empty month selection and the `""` sentinel behave exactly like
    /// omitting the month filter.
    #[test]
    fn prop_empty_month_selections_are_permissive(
        vouchers in vouchers_strategy(),
        year in 2020i32..2027,
    ) {
        let base = StatementFilters::new().with_year(year.to_string());
        let empty = base.clone().with_months(Vec::new());
        let sentinel = base.clone().with_months(vec![String::new()]);
        let sentinel_mixed =
            base.clone().with_months(vec!["3".to_string(), String::new()]);

        let unrestricted = apply_filters(&vouchers, &base);
        prop_assert_eq!(&apply_filters(&vouchers, &empty), &unrestricted);
        prop_assert_eq!(&apply_filters(&vouchers, &sentinel), &unrestricted);
        prop_assert_eq!(&apply_filters(&vouchers, &sentinel_mixed), &unrestricted);
    }

    /// Filtering is idempotent: a second pass changes nothing.
    #[test]
    fn prop_apply_filters_is_idempotent(
        vouchers in vouchers_strategy(),
        year in 2020i32..2027,
        month in 1u32..=12,
    ) {
        let filters = StatementFilters::new()
            .with_year(year.to_string())
            .with_months(vec![month.to_string()]);

        let once = apply_filters(&vouchers, &filters);
        let twice = apply_filters(&once, &filters);
        prop_assert_eq!(once, twice);
    }

    /// The filtered set is always a subset of the input, in input order.
    #[test]
    fn prop_filtered_set_is_ordered_subset(
        vouchers in vouchers_strategy(),
        year in 2020i32..2027,
    ) {
        let filters = StatementFilters::new().with_year(year.to_string());
        let passed = apply_filters(&vouchers, &filters);

        prop_assert!(passed.len() <= vouchers.len());
        let mut cursor = 0;
        for voucher in &passed {
            let position = vouchers[cursor..]
                .iter()
                .position(|candidate| candidate == voucher);
            prop_assert!(position.is_some(), "filtered voucher not found in input order");
            cursor += position.unwrap() + 1;
        }
    }

    /// Currency buckets are homogeneous: every voucher in a bucket carries
    /// that bucket's currency (unset defaulting to USD).
    #[test]
    fn prop_currency_buckets_are_homogeneous(vouchers in vouchers_strategy()) {
        let groups = group_by_currency(&vouchers, CurrencyFilter::All);

        let mut total = 0;
        for (currency, bucket) in &groups {
            total += bucket.len();
            for voucher in bucket {
                prop_assert_eq!(voucher.currency_or_default(), *currency);
            }
        }
        // Partitioning loses nothing.
        prop_assert_eq!(total, vouchers.len());
    }

    /// A specific currency filter composed with grouping yields exactly one
    /// bucket of matching vouchers.
    #[test]
    fn prop_specific_currency_yields_single_matching_bucket(
        vouchers in vouchers_strategy(),
    ) {
        let filters = StatementFilters::new().with_currency(CurrencyFilter::Only(Currency::Eur));
        let passed = apply_filters(&vouchers, &filters);
        let groups = group_by_currency(&passed, filters.currency);

        prop_assert_eq!(groups.len(), 1);
        for voucher in &groups[&Currency::Eur] {
            prop_assert_eq!(voucher.currency, Some(Currency::Eur));
        }
    }
}

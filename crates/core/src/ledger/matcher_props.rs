//! Property-based tests for the ledger matcher.

use caravel_shared::types::{PaymentId, VoucherId};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::payment::{Payment, PaymentDirection, PaymentStatus};

use super::matcher::{payments_received, remaining_for_voucher};

/// Strategy for non-negative payment amounts with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

fn direction_strategy() -> impl Strategy<Value = PaymentDirection> {
    prop_oneof![
        Just(PaymentDirection::Incoming),
        Just(PaymentDirection::Outgoing),
    ]
}

fn status_strategy() -> impl Strategy<Value = PaymentStatus> {
    prop_oneof![
        Just(PaymentStatus::Pending),
        Just(PaymentStatus::Approved),
        Just(PaymentStatus::Rejected),
        Just(PaymentStatus::Other("archived".to_string())),
    ]
}

fn payment_strategy(voucher_id: &'static str) -> impl Strategy<Value = Payment> {
    (
        amount_strategy(),
        direction_strategy(),
        status_strategy(),
        prop_oneof![Just(None), Just(Some(voucher_id)), Just(Some("other"))],
    )
        .prop_map(|(amount, direction, status, tied)| Payment {
            id: PaymentId::new("p"),
            direction,
            amount,
            status,
            related_voucher: tied.map(VoucherId::new),
            office_name: Some("Acme".to_string()),
        })
}

fn payments_strategy() -> impl Strategy<Value = Vec<Payment>> {
    prop::collection::vec(payment_strategy("v1"), 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For any payment set, the service-direction remaining equals the
    /// manual netting over approved payments tied to the voucher.
    #[test]
    fn prop_remaining_matches_manual_netting(
        services_total in amount_strategy(),
        payments in payments_strategy(),
    ) {
        let voucher_id = VoucherId::new("v1");
        let tied: Vec<&Payment> = payments
            .iter()
            .filter(|p| p.status.is_approved() && p.related_voucher.as_ref() == Some(&voucher_id))
            .collect();

        let outgoing: Decimal = tied
            .iter()
            .filter(|p| p.direction == PaymentDirection::Outgoing)
            .map(|p| p.amount)
            .sum();
        let incoming: Decimal = tied
            .iter()
            .filter(|p| p.direction == PaymentDirection::Incoming)
            .map(|p| p.amount)
            .sum();

        prop_assert_eq!(
            remaining_for_voucher(&voucher_id, services_total, &payments),
            services_total - outgoing + incoming
        );
    }

    /// Adding any number of non-approved payments changes nothing.
    #[test]
    fn prop_unapproved_payments_are_inert(
        services_total in amount_strategy(),
        approved in payments_strategy(),
        noise in payments_strategy(),
    ) {
        let voucher_id = VoucherId::new("v1");

        let mut with_noise = approved.clone();
        with_noise.extend(noise.into_iter().map(|mut p| {
            if p.status.is_approved() {
                p.status = PaymentStatus::Pending;
            }
            p
        }));

        prop_assert_eq!(
            remaining_for_voucher(&voucher_id, services_total, &with_noise),
            remaining_for_voucher(&voucher_id, services_total, &approved)
        );
        prop_assert_eq!(payments_received(&with_noise), payments_received(&approved));
    }

    /// The office-wide aggregate is never positive and ignores incoming
    /// payments entirely.
    #[test]
    fn prop_payments_received_ignores_incoming(payments in payments_strategy()) {
        let received = payments_received(&payments);
        prop_assert!(received <= Decimal::ZERO);

        let outgoing_only: Vec<Payment> = payments
            .iter()
            .filter(|p| p.direction == PaymentDirection::Outgoing)
            .cloned()
            .collect();
        prop_assert_eq!(received, payments_received(&outgoing_only));
    }

    /// The matcher is a pure function: same inputs, same result.
    #[test]
    fn prop_matcher_is_deterministic(
        services_total in amount_strategy(),
        payments in payments_strategy(),
    ) {
        let voucher_id = VoucherId::new("v1");
        prop_assert_eq!(
            remaining_for_voucher(&voucher_id, services_total, &payments),
            remaining_for_voucher(&voucher_id, services_total, &payments)
        );
    }
}

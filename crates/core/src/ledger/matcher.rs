//! Ledger matcher: nets approved payments against voucher balances.

use caravel_shared::types::VoucherId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::payment::{Payment, PaymentDirection};
use crate::voucher::Voucher;

/// Client-direction balance of one voucher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientBalance {
    /// Sum of approved incoming payments tied to the voucher.
    pub paid: Decimal,
    /// What the client still owes; negative signals overpayment.
    pub remaining: Decimal,
}

fn tied_approved<'a>(
    payments: &'a [Payment],
    voucher_id: &'a VoucherId,
) -> impl Iterator<Item = &'a Payment> {
    payments.iter().filter(move |p| p.settles(voucher_id))
}

fn sum_direction<'a>(
    payments: impl Iterator<Item = &'a Payment>,
    direction: PaymentDirection,
) -> Decimal {
    payments
        .filter(|p| p.direction == direction)
        .map(|p| p.amount)
        .sum()
}

/// Service-direction remaining balance of one voucher.
///
/// `services_total − Σ outgoing + Σ incoming` over approved payments tied to
/// the voucher. A negative result signals overpayment; it is never clamped
/// here, callers label it.
#[must_use]
pub fn remaining_for_voucher(
    voucher_id: &VoucherId,
    services_total: Decimal,
    payments: &[Payment],
) -> Decimal {
    let outgoing = sum_direction(tied_approved(payments, voucher_id), PaymentDirection::Outgoing);
    let incoming = sum_direction(tied_approved(payments, voucher_id), PaymentDirection::Incoming);
    services_total - outgoing + incoming
}

/// Client-direction balance of one voucher.
///
/// `paid` is the sum of approved incoming payments tied to the voucher;
/// `remaining = total_amount − paid + Σ outgoing`. Never clamped.
#[must_use]
pub fn remaining_for_client_voucher(voucher: &Voucher, payments: &[Payment]) -> ClientBalance {
    let paid = sum_direction(tied_approved(payments, &voucher.id), PaymentDirection::Incoming);
    let outgoing = sum_direction(tied_approved(payments, &voucher.id), PaymentDirection::Outgoing);

    ClientBalance {
        paid,
        remaining: voucher.total_amount - paid + outgoing,
    }
}

/// Office-wide payment adjustment.
///
/// Sums `−amount` for every approved outgoing payment, tied or not. Incoming
/// payments, tied or untied, have no effect on this aggregate.
#[must_use]
pub fn payments_received(payments: &[Payment]) -> Decimal {
    payments
        .iter()
        .filter(|p| p.status.is_approved() && p.direction == PaymentDirection::Outgoing)
        .map(|p| -p.amount)
        .sum()
}

/// Counts approved voucher-tied payments that reference no fetched voucher.
///
/// Such payments fail to match anything per-voucher and are excluded from
/// those totals; the count surfaces the condition without changing it.
#[must_use]
pub fn orphaned_payments(payments: &[Payment], vouchers: &[Voucher]) -> usize {
    payments
        .iter()
        .filter(|p| p.status.is_approved())
        .filter_map(|p| p.related_voucher.as_ref())
        .filter(|id| !vouchers.iter().any(|v| &v.id == *id))
        .count()
}

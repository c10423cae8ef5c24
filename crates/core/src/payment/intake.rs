//! Payment intake: raw snapshot records to normalized payments.
//!
//! The upstream store sometimes saves `relatedVoucher` as a bare id string
//! and sometimes as an expanded voucher object. The shape is unwrapped here,
//! in one place, so downstream matching logic only ever sees a bare id.

use caravel_shared::types::{PaymentId, VoucherId};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::types::{Payment, PaymentDirection, PaymentStatus};

/// The polymorphic `relatedVoucher` reference as stored upstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawVoucherRef {
    /// Bare id string.
    Id(String),
    /// Expanded voucher object; only the id is of interest.
    Expanded(RawVoucherRefObject),
}

/// The expanded form of a voucher reference.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawVoucherRefObject {
    /// Voucher ID.
    #[serde(alias = "_id")]
    pub id: Option<String>,
}

/// Extracts the voucher id from either reference shape.
///
/// This is the single extraction point; an expanded object without an id
/// resolves to no reference at all.
#[must_use]
fn voucher_ref_id(reference: RawVoucherRef) -> Option<VoucherId> {
    match reference {
        RawVoucherRef::Id(id) => Some(VoucherId::new(id)),
        RawVoucherRef::Expanded(obj) => obj.id.map(VoucherId::new),
    }
}

/// A raw payment record as stored upstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPayment {
    /// Payment ID.
    #[serde(alias = "_id")]
    pub id: Option<String>,
    /// Direction string, "INCOMING" or "OUTGOING".
    #[serde(rename = "type")]
    pub payment_type: Option<String>,
    /// Payment amount; missing reads as zero.
    pub amount: Option<Decimal>,
    /// Approval status string.
    pub status: Option<String>,
    /// Polymorphic voucher reference.
    pub related_voucher: Option<RawVoucherRef>,
    /// Counterparty name.
    pub office_name: Option<String>,
}

/// Normalizes one raw payment.
///
/// Returns `None` when the record has no recognizable direction; such a
/// record cannot affect any balance and is excluded, consistent with the
/// degrade-don't-abort policy for malformed snapshot data.
#[must_use]
pub fn normalize_payment(raw: RawPayment) -> Option<Payment> {
    let direction = match raw.payment_type.as_deref().map(str::to_uppercase).as_deref() {
        Some("INCOMING") => PaymentDirection::Incoming,
        Some("OUTGOING") => PaymentDirection::Outgoing,
        _ => return None,
    };

    Some(Payment {
        id: PaymentId::new(raw.id.unwrap_or_default()),
        direction,
        amount: raw.amount.unwrap_or(Decimal::ZERO),
        status: raw
            .status
            .as_deref()
            .map_or(PaymentStatus::Other(String::new()), PaymentStatus::parse),
        related_voucher: raw.related_voucher.and_then(voucher_ref_id),
        office_name: raw.office_name,
    })
}

/// Normalizes a full payment snapshot, dropping unusable records.
#[must_use]
pub fn normalize_payments(raw: Vec<RawPayment>) -> Vec<Payment> {
    raw.into_iter().filter_map(normalize_payment).collect()
}

//! Normalized payment domain types.

use caravel_shared::types::{PaymentId, VoucherId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a ledger payment between the agency and a counterparty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentDirection {
    /// The counterparty paid the agency.
    Incoming,
    /// The agency paid the counterparty.
    Outgoing,
}

/// Approval status of a ledger payment.
///
/// The approval workflow lives upstream and is open-ended; statuses outside
/// the known set are preserved verbatim and treated as not approved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentStatus {
    /// Awaiting approval.
    Pending,
    /// Approved; participates in balance computations.
    Approved,
    /// Rejected.
    Rejected,
    /// Any other upstream status.
    Other(String),
}

impl PaymentStatus {
    /// Parses an upstream status string.
    #[must_use]
    pub fn parse(status: &str) -> Self {
        match status.to_lowercase().as_str() {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Other(status.to_string()),
        }
    }

    /// Returns true if the payment may participate in balance computations.
    #[must_use]
    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }
}

/// A normalized ledger payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    /// Payment ID.
    pub id: PaymentId,
    /// Payment direction.
    pub direction: PaymentDirection,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Approval status.
    pub status: PaymentStatus,
    /// Voucher this payment settles, when tied to one.
    pub related_voucher: Option<VoucherId>,
    /// Counterparty name.
    pub office_name: Option<String>,
}

impl Payment {
    /// Returns true if this payment is approved and tied to the given
    /// voucher.
    #[must_use]
    pub fn settles(&self, voucher_id: &VoucherId) -> bool {
        self.status.is_approved() && self.related_voucher.as_ref() == Some(voucher_id)
    }
}

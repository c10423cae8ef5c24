//! Statement output types.

use caravel_shared::types::{Currency, VoucherId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::attribution::{Counterparty, ServiceBreakdown};

use super::totals::StatementTotals;

/// One service voucher on a statement: the office's charges and what the
/// agency still owes for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceVoucherRow {
    /// Voucher ID.
    pub voucher_id: VoucherId,
    /// Human-facing voucher number.
    pub voucher_number: i64,
    /// End-customer name.
    pub client_name: String,
    /// Per-category charges billed to the office.
    pub breakdown: ServiceBreakdown,
    /// Service-direction remaining balance; negative means overpaid.
    pub remaining: Decimal,
}

/// One client voucher on a statement: what the counterparty bought and what
/// it still owes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientVoucherRow {
    /// Voucher ID.
    pub voucher_id: VoucherId,
    /// Human-facing voucher number.
    pub voucher_number: i64,
    /// End-customer name.
    pub client_name: String,
    /// Client-facing price.
    pub total_amount: Decimal,
    /// Approved incoming payments tied to the voucher.
    pub paid: Decimal,
    /// Client-direction remaining balance; negative means overpaid.
    pub remaining: Decimal,
}

/// One currency bucket of a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyGroup {
    /// Currency of every figure in this group.
    pub currency: Currency,
    /// Service-direction rows.
    pub service_rows: Vec<ServiceVoucherRow>,
    /// Client-direction rows.
    pub client_rows: Vec<ClientVoucherRow>,
    /// Summed totals for this bucket.
    pub totals: StatementTotals,
}

/// A full counterparty statement, recomputed from a snapshot per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeStatement {
    /// The counterparty the statement was generated for.
    pub counterparty: Counterparty,
    /// Generation timestamp.
    pub generated_at: DateTime<Utc>,
    /// Per-currency buckets.
    pub groups: Vec<CurrencyGroup>,
    /// Office-wide payment adjustment (negative of approved outgoing sums).
    pub payments_received: Decimal,
    /// Approved voucher-tied payments that resolved to no fetched voucher.
    pub orphaned_payments: usize,
}

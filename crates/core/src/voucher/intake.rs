//! Voucher intake: raw snapshot records to normalized vouchers.
//!
//! Snapshot JSON comes from the upstream booking API unchanged, so the raw
//! models mirror its camelCase field names and tolerate missing fields.
//! Malformed fields degrade (zero amounts, unknown currency dropped) rather
//! than failing the whole snapshot.

use caravel_shared::types::{Currency, VoucherId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::types::{ServiceLine, TripCharges, Voucher};

/// A raw service line as stored upstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawServiceLine {
    /// Office billed for this line.
    pub office_name: Option<String>,
    /// Line price; missing reads as zero.
    pub price: Option<Decimal>,
}

impl RawServiceLine {
    fn normalize(self) -> ServiceLine {
        ServiceLine {
            office_name: self.office_name,
            price: self.price.unwrap_or(Decimal::ZERO),
        }
    }
}

/// The legacy per-voucher payment block carrying the aggregate trip charge.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLegacyPayments {
    /// Legacy single aggregate trip attribution.
    pub trips: Option<RawServiceLine>,
}

/// A raw voucher record as stored upstream.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawVoucher {
    /// Voucher ID.
    #[serde(alias = "_id")]
    pub id: Option<String>,
    /// Human-facing voucher number.
    pub voucher_number: Option<i64>,
    /// End-customer name.
    pub client_name: Option<String>,
    /// Counterparty office name.
    pub office_name: Option<String>,
    /// Currency code.
    pub currency: Option<String>,
    /// Client-facing price.
    pub total_amount: Option<Decimal>,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Arrival date.
    pub arrival_date: Option<DateTime<Utc>>,
    /// Hotel line items.
    pub hotels: Vec<RawServiceLine>,
    /// Transfer line items.
    pub transfers: Vec<RawServiceLine>,
    /// Flight line items.
    pub flights: Vec<RawServiceLine>,
    /// Itemized trip lines, when the voucher uses that representation.
    pub trips: Vec<RawServiceLine>,
    /// Legacy payment block, when present.
    pub payments: Option<RawLegacyPayments>,
}

/// Normalizes one raw voucher.
///
/// The trip representation is resolved here, exactly once: an itemized array
/// with at least one office attribution wins over the legacy aggregate, which
/// is then ignored for that voucher.
#[must_use]
pub fn normalize_voucher(raw: RawVoucher) -> Voucher {
    let itemized_attributed = raw
        .trips
        .iter()
        .any(|line| line.office_name.is_some());
    let legacy = raw.payments.and_then(|p| p.trips);

    let trips = if itemized_attributed {
        TripCharges::Itemized(raw.trips.into_iter().map(RawServiceLine::normalize).collect())
    } else if let Some(aggregate) = legacy {
        TripCharges::Aggregate(aggregate.normalize())
    } else if raw.trips.is_empty() {
        TripCharges::None
    } else {
        TripCharges::Itemized(raw.trips.into_iter().map(RawServiceLine::normalize).collect())
    };

    Voucher {
        id: VoucherId::new(raw.id.unwrap_or_default()),
        voucher_number: raw.voucher_number.unwrap_or(0),
        client_name: raw.client_name.unwrap_or_default(),
        office_name: raw.office_name,
        currency: raw
            .currency
            .as_deref()
            .and_then(|code| code.parse::<Currency>().ok()),
        total_amount: raw.total_amount.unwrap_or(Decimal::ZERO),
        created_at: raw.created_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        arrival_date: raw.arrival_date,
        hotels: raw.hotels.into_iter().map(RawServiceLine::normalize).collect(),
        transfers: raw
            .transfers
            .into_iter()
            .map(RawServiceLine::normalize)
            .collect(),
        flights: raw
            .flights
            .into_iter()
            .map(RawServiceLine::normalize)
            .collect(),
        trips,
    }
}

/// Normalizes a full voucher snapshot.
#[must_use]
pub fn normalize_vouchers(raw: Vec<RawVoucher>) -> Vec<Voucher> {
    raw.into_iter().map(normalize_voucher).collect()
}

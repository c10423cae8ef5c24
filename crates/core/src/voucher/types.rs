//! Normalized voucher domain types.

use caravel_shared::types::{Currency, VoucherId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single service line item on a voucher.
///
/// `office_name` identifies the partner office billed for this line; a line
/// without an office attribution never matches any counterparty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceLine {
    /// Office billed for this line, if any.
    pub office_name: Option<String>,
    /// Cost owed to that office, in the voucher's currency.
    pub price: Decimal,
}

impl ServiceLine {
    /// Returns true if this line is billed to the given office.
    #[must_use]
    pub fn is_billed_to(&self, office: &str) -> bool {
        self.office_name.as_deref() == Some(office)
    }
}

/// Trip charges on a voucher.
///
/// Upstream records carry trips in one of two shapes: an itemized array of
/// trip lines, or a single legacy aggregate under `payments.trips`. Exactly
/// one representation is authoritative per voucher; intake resolves the
/// precedence once (itemized attribution wins) so aggregation never has to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "charges", rename_all = "snake_case")]
pub enum TripCharges {
    /// No trip charges on this voucher.
    None,
    /// Itemized trip lines, each with its own attribution.
    Itemized(Vec<ServiceLine>),
    /// Legacy single aggregate attribution.
    Aggregate(ServiceLine),
}

impl TripCharges {
    /// Sums the trip cost billed to the given office.
    #[must_use]
    pub fn billed_to(&self, office: &str) -> Decimal {
        match self {
            Self::None => Decimal::ZERO,
            Self::Itemized(lines) => lines
                .iter()
                .filter(|line| line.is_billed_to(office))
                .map(|line| line.price)
                .sum(),
            Self::Aggregate(line) => {
                if line.is_billed_to(office) {
                    line.price
                } else {
                    Decimal::ZERO
                }
            }
        }
    }

    /// Returns true if any trip charge is billed to the given office.
    #[must_use]
    pub fn attributes_to(&self, office: &str) -> bool {
        match self {
            Self::None => false,
            Self::Itemized(lines) => lines.iter().any(|line| line.is_billed_to(office)),
            Self::Aggregate(line) => line.is_billed_to(office),
        }
    }
}

/// A normalized booking voucher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    /// Voucher ID.
    pub id: VoucherId,
    /// Human-facing voucher number.
    pub voucher_number: i64,
    /// End-customer name.
    pub client_name: String,
    /// Counterparty office, absent for a direct client.
    pub office_name: Option<String>,
    /// Voucher currency; applies uniformly to the total and every line price.
    pub currency: Option<Currency>,
    /// Client-facing price.
    pub total_amount: Decimal,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Arrival date, when known.
    pub arrival_date: Option<DateTime<Utc>>,
    /// Hotel line items.
    pub hotels: Vec<ServiceLine>,
    /// Transfer line items.
    pub transfers: Vec<ServiceLine>,
    /// Flight line items.
    pub flights: Vec<ServiceLine>,
    /// Trip charges (precedence already resolved at intake).
    pub trips: TripCharges,
}

impl Voucher {
    /// The currency used for grouping; unset currency defaults to USD.
    #[must_use]
    pub fn currency_or_default(&self) -> Currency {
        self.currency.unwrap_or(Currency::Usd)
    }

    /// Returns true if this voucher was sold directly, with no office
    /// intermediary.
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.office_name.is_none()
    }
}

//! Per-voucher service cost breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::voucher::{ServiceLine, Voucher};

/// Per-voucher service charges attributable to one office, by category.
///
/// All sums are in the voucher's own currency; the caller is responsible for
/// not mixing currencies across vouchers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceBreakdown {
    /// Hotel charges billed to the office.
    pub hotels: Decimal,
    /// Transfer charges billed to the office.
    pub transfers: Decimal,
    /// Trip charges billed to the office.
    pub trips: Decimal,
    /// Flight charges billed to the office.
    pub flights: Decimal,
    /// Sum of the four categories.
    pub total: Decimal,
}

fn sum_billed(lines: &[ServiceLine], office: &str) -> Decimal {
    lines
        .iter()
        .filter(|line| line.is_billed_to(office))
        .map(|line| line.price)
        .sum()
}

/// Computes the service charges on one voucher billed to the given office.
///
/// Trip charges follow the representation resolved at intake: an itemized
/// attribution is summed per line, a legacy aggregate contributes at most one
/// figure, never both.
#[must_use]
pub fn compute_service_breakdown(voucher: &Voucher, office: &str) -> ServiceBreakdown {
    let hotels = sum_billed(&voucher.hotels, office);
    let transfers = sum_billed(&voucher.transfers, office);
    let flights = sum_billed(&voucher.flights, office);
    let trips = voucher.trips.billed_to(office);

    ServiceBreakdown {
        hotels,
        transfers,
        trips,
        flights,
        total: hotels + transfers + trips + flights,
    }
}

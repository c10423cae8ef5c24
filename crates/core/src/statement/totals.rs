//! Statement totals across the two debt directions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::attribution::compute_service_breakdown;
use crate::ledger::{remaining_for_client_voucher, remaining_for_voucher};
use crate::payment::Payment;
use crate::voucher::Voucher;

/// Summed totals over one currency bucket of a statement.
///
/// The service-direction figures (what the agency owes the office) and the
/// client-direction figures (what the office/client owes the agency) cover
/// different voucher populations, which may overlap. They are independent
/// aggregates and are never merged into one number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementTotals {
    /// Hotel charges across service vouchers.
    pub hotels: Decimal,
    /// Transfer charges across service vouchers.
    pub transfers: Decimal,
    /// Trip charges across service vouchers.
    pub trips: Decimal,
    /// Flight charges across service vouchers.
    pub flights: Decimal,
    /// Total services provided by the office.
    pub services_provided: Decimal,
    /// Service-direction remaining balance across service vouchers.
    pub total_remaining: Decimal,
    /// Client-facing price across client vouchers.
    pub client_total_amount: Decimal,
    /// Approved incoming payments across client vouchers.
    pub client_total_paid: Decimal,
    /// Client-direction remaining balance across client vouchers.
    pub client_total_remaining: Decimal,
}

/// Sums both debt directions over the given voucher sets.
#[must_use]
pub fn compute_totals(
    service_vouchers: &[Voucher],
    client_vouchers: &[Voucher],
    payments: &[Payment],
    office: &str,
) -> StatementTotals {
    let mut totals = StatementTotals::default();

    for voucher in service_vouchers {
        let breakdown = compute_service_breakdown(voucher, office);
        totals.hotels += breakdown.hotels;
        totals.transfers += breakdown.transfers;
        totals.trips += breakdown.trips;
        totals.flights += breakdown.flights;
        totals.services_provided += breakdown.total;
        totals.total_remaining += remaining_for_voucher(&voucher.id, breakdown.total, payments);
    }

    for voucher in client_vouchers {
        let balance = remaining_for_client_voucher(voucher, payments);
        totals.client_total_amount += voucher.total_amount;
        totals.client_total_paid += balance.paid;
        totals.client_total_remaining += balance.remaining;
    }

    totals
}

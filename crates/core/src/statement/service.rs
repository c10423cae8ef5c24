//! Statement assembly: the full reconciliation pipeline for one counterparty.

use std::collections::BTreeSet;

use caravel_shared::types::Currency;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::attribution::{compute_attribution, compute_service_breakdown, Counterparty};
use crate::ledger::{
    orphaned_payments, payments_received, remaining_for_client_voucher, remaining_for_voucher,
};
use crate::payment::Payment;
use crate::voucher::Voucher;

use super::filter::{StatementFilters, apply_filters};
use super::group::group_by_currency;
use super::totals::compute_totals;
use super::types::{ClientVoucherRow, CurrencyGroup, OfficeStatement, ServiceVoucherRow};

/// Generates counterparty statements from voucher and payment snapshots.
///
/// Each call recomputes everything from the given snapshot; there is no
/// cached or incrementally-updated state.
pub struct StatementService;

impl StatementService {
    /// Runs the full pipeline for one counterparty.
    #[must_use]
    pub fn generate(
        vouchers: &[Voucher],
        payments: &[Payment],
        counterparty: &Counterparty,
        filters: &StatementFilters,
    ) -> OfficeStatement {
        // The ledger matcher only ever sees payments booked against this
        // counterparty; the payment collaborator shares one flat list.
        let scoped: Vec<Payment> = payments
            .iter()
            .filter(|payment| payment.office_name.as_deref() == Some(counterparty.name.as_str()))
            .cloned()
            .collect();

        debug!(
            counterparty = %counterparty.name,
            vouchers = vouchers.len(),
            payments = scoped.len(),
            "generating statement"
        );

        let attribution = compute_attribution(vouchers, counterparty);
        let service_set = apply_filters(&attribution.service_vouchers, filters);
        let client_set = apply_filters(&attribution.client_vouchers, filters);

        let service_groups = group_by_currency(&service_set, filters.currency);
        let client_groups = group_by_currency(&client_set, filters.currency);

        let currencies: BTreeSet<Currency> = service_groups
            .keys()
            .chain(client_groups.keys())
            .copied()
            .collect();

        let groups: Vec<CurrencyGroup> = currencies
            .into_iter()
            .map(|currency| {
                let service_bucket =
                    service_groups.get(&currency).map_or(&[][..], Vec::as_slice);
                let client_bucket = client_groups.get(&currency).map_or(&[][..], Vec::as_slice);

                let service_rows = service_bucket
                    .iter()
                    .map(|voucher| {
                        let breakdown = compute_service_breakdown(voucher, &counterparty.name);
                        let remaining =
                            remaining_for_voucher(&voucher.id, breakdown.total, &scoped);
                        ServiceVoucherRow {
                            voucher_id: voucher.id.clone(),
                            voucher_number: voucher.voucher_number,
                            client_name: voucher.client_name.clone(),
                            breakdown,
                            remaining,
                        }
                    })
                    .collect();

                let client_rows = client_bucket
                    .iter()
                    .map(|voucher| {
                        let balance = remaining_for_client_voucher(voucher, &scoped);
                        ClientVoucherRow {
                            voucher_id: voucher.id.clone(),
                            voucher_number: voucher.voucher_number,
                            client_name: voucher.client_name.clone(),
                            total_amount: voucher.total_amount,
                            paid: balance.paid,
                            remaining: balance.remaining,
                        }
                    })
                    .collect();

                CurrencyGroup {
                    currency,
                    service_rows,
                    client_rows,
                    totals: compute_totals(
                        service_bucket,
                        client_bucket,
                        &scoped,
                        &counterparty.name,
                    ),
                }
            })
            .collect();

        // Orphan detection runs against the full snapshot, not the filtered
        // view, so a filter change never looks like missing data.
        let orphaned = orphaned_payments(&scoped, vouchers);
        if orphaned > 0 {
            warn!(
                counterparty = %counterparty.name,
                count = orphaned,
                "approved payments reference vouchers missing from the snapshot"
            );
        }

        info!(
            counterparty = %counterparty.name,
            groups = groups.len(),
            service_vouchers = service_set.len(),
            client_vouchers = client_set.len(),
            "statement generated"
        );

        OfficeStatement {
            counterparty: counterparty.clone(),
            generated_at: Utc::now(),
            groups,
            payments_received: payments_received(&scoped),
            orphaned_payments: orphaned,
        }
    }
}

//! Ledger reconciliation engine for Caravel.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. It computes office/client financial statements from
//! already-fetched voucher and payment snapshots: attribution of vouchers to
//! a counterparty, per-voucher service cost breakdowns, netting of approved
//! ledger payments, and filtered per-currency aggregation.
//!
//! # Modules
//!
//! - `voucher` - Voucher domain types and snapshot intake
//! - `payment` - Payment domain types and snapshot intake
//! - `attribution` - Counterparty attribution and service cost breakdown
//! - `ledger` - Payment netting against attributed vouchers
//! - `statement` - Filters, currency grouping, totals, and statement assembly

pub mod attribution;
pub mod ledger;
pub mod payment;
pub mod statement;
pub mod voucher;

pub use attribution::{
    Attribution, Counterparty, CounterpartyKind, ServiceBreakdown, compute_attribution,
    compute_service_breakdown,
};
pub use ledger::{
    ClientBalance, orphaned_payments, payments_received, remaining_for_client_voucher,
    remaining_for_voucher,
};
pub use payment::{Payment, PaymentDirection, PaymentStatus};
pub use statement::{
    CurrencyFilter, FilterOptions, OfficeStatement, StatementFilters, StatementService,
    StatementTotals, apply_filters, compute_totals, derive_filter_options, group_by_currency,
};
pub use voucher::{ServiceLine, TripCharges, Voucher};

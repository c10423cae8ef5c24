//! Statement filters, currency grouping, totals, and assembly.
//!
//! The statement pipeline is recomputed from a fresh voucher/payment snapshot
//! on every invocation. Every stage is a pure function over immutable inputs,
//! so re-running on each filter change is safe and idempotent.

pub mod filter;
pub mod group;
pub mod options;
pub mod service;
pub mod totals;
pub mod types;

#[cfg(test)]
mod filter_props;

pub use filter::{CurrencyFilter, StatementFilters, apply_filters};
pub use group::group_by_currency;
pub use options::{FilterOptions, derive_filter_options};
pub use service::StatementService;
pub use totals::{StatementTotals, compute_totals};
pub use types::{ClientVoucherRow, CurrencyGroup, OfficeStatement, ServiceVoucherRow};

//! Counterparty attribution and service cost breakdown.
//!
//! Attribution partitions the voucher set into the two debt directions of a
//! counterparty statement: vouchers on which the counterparty provided
//! services to the agency, and vouchers the counterparty bought from the
//! agency as end customer. The two views are computed independently and a
//! voucher may legitimately appear in both.

pub mod breakdown;
pub mod filter;

pub use breakdown::{ServiceBreakdown, compute_service_breakdown};
pub use filter::{Attribution, Counterparty, CounterpartyKind, compute_attribution};

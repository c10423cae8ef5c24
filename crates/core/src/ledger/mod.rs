//! Payment netting against attributed vouchers.
//!
//! Two independent ledgers with opposite debt directions:
//! - service direction: what the agency still owes an office for services
//! - client direction: what an office/client still owes the agency for its
//!   own vouchers
//!
//! The two are never summed together without explicit labeling.

pub mod matcher;

#[cfg(test)]
mod matcher_props;

pub use matcher::{
    ClientBalance, orphaned_payments, payments_received, remaining_for_client_voucher,
    remaining_for_voucher,
};

//! Voucher domain types and snapshot intake.
//!
//! Vouchers are created and updated by the upstream booking API; the engine
//! only reads them. Intake normalizes the raw JSON records once, so the rest
//! of the pipeline never probes record shapes.

pub mod intake;
pub mod types;

pub use intake::{RawVoucher, normalize_voucher, normalize_vouchers};
pub use types::{ServiceLine, TripCharges, Voucher};

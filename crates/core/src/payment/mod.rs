//! Payment domain types and snapshot intake.
//!
//! Payments are created and approved by the payment-management collaborator;
//! the engine is strictly read-only over them. Only approved entries ever
//! participate in a balance computation.

pub mod intake;
pub mod types;

pub use intake::{RawPayment, normalize_payment, normalize_payments};
pub use types::{Payment, PaymentDirection, PaymentStatus};

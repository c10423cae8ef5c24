//! Currency codes with decimal-only monetary math.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are carried as `rust_decimal::Decimal` alongside these codes.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the agency.
///
/// Voucher totals and service line prices are always expressed in the
/// voucher's own currency; amounts in different currencies are never summed
/// into one figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// Turkish Lira
    Try,
    /// British Pound
    Gbp,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Try => write!(f, "TRY"),
            Self::Gbp => write!(f, "GBP"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "TRY" => Ok(Self::Try),
            "GBP" => Ok(Self::Gbp),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Snapshot file locations.
    pub snapshot: SnapshotConfig,
    /// Statement generation parameters.
    pub statement: StatementConfig,
}

/// Snapshot file locations.
///
/// Snapshots are plain JSON exports of the voucher and payment collections
/// produced by the upstream booking API.
#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotConfig {
    /// Path to the voucher snapshot.
    #[serde(default = "default_vouchers_path")]
    pub vouchers_path: String,
    /// Path to the payment snapshot.
    #[serde(default = "default_payments_path")]
    pub payments_path: String,
}

fn default_vouchers_path() -> String {
    "data/vouchers.json".to_string()
}

fn default_payments_path() -> String {
    "data/payments.json".to_string()
}

/// Statement generation parameters.
///
/// Filter fields mirror what the back-office UI submits: plain strings with
/// empty string meaning "no restriction" and `"ALL"` disabling the currency
/// filter.
#[derive(Debug, Clone, Deserialize)]
pub struct StatementConfig {
    /// Counterparty name (office or direct client).
    pub counterparty: String,
    /// Whether the counterparty is a direct client rather than an office.
    #[serde(default)]
    pub direct_client: bool,
    /// Year filter ("" = no restriction).
    #[serde(default)]
    pub year: String,
    /// Creation month multi-select (1-based month numbers as strings).
    #[serde(default)]
    pub months: Vec<String>,
    /// Arrival month multi-select (1-based month numbers as strings).
    #[serde(default)]
    pub arrival_months: Vec<String>,
    /// Currency filter code, or "ALL".
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Free-text search over voucher number and client name.
    #[serde(default)]
    pub search: String,
}

fn default_currency() -> String {
    "ALL".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CARAVEL").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

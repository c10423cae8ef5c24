//! Caravel statement reporter.
//!
//! Loads voucher and payment snapshots exported by the booking API, runs the
//! reconciliation pipeline once for the configured counterparty, and prints
//! the resulting statement as JSON. Every invocation recomputes from the
//! snapshot; nothing is cached between runs.
//!
//! Usage: cargo run --bin reporter

use std::fs;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use caravel_core::payment::{RawPayment, normalize_payments};
use caravel_core::voucher::{RawVoucher, normalize_vouchers};
use caravel_core::{
    Counterparty, CurrencyFilter, Payment, StatementFilters, StatementService, Voucher,
};
use caravel_shared::{AppConfig, AppError};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "caravel=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().map_err(AppError::from)?;

    let vouchers = load_vouchers(&config.snapshot.vouchers_path)?;
    let payments = load_payments(&config.snapshot.payments_path)?;
    info!(
        vouchers = vouchers.len(),
        payments = payments.len(),
        "snapshots loaded"
    );

    let counterparty = if config.statement.direct_client {
        Counterparty::direct_client(config.statement.counterparty.as_str())
    } else {
        Counterparty::office(config.statement.counterparty.as_str())
    };

    let currency: CurrencyFilter = config
        .statement
        .currency
        .parse()
        .map_err(AppError::Validation)?;
    let filters = StatementFilters::new()
        .with_year(config.statement.year.as_str())
        .with_months(config.statement.months.clone())
        .with_arrival_months(config.statement.arrival_months.clone())
        .with_currency(currency)
        .with_search(config.statement.search.as_str());

    let statement = StatementService::generate(&vouchers, &payments, &counterparty, &filters);

    println!("{}", serde_json::to_string_pretty(&statement)?);
    Ok(())
}

/// Reads and normalizes the voucher snapshot.
fn load_vouchers(path: &str) -> Result<Vec<Voucher>, AppError> {
    let raw: Vec<RawVoucher> = read_snapshot(path)?;
    Ok(normalize_vouchers(raw))
}

/// Reads and normalizes the payment snapshot.
fn load_payments(path: &str) -> Result<Vec<Payment>, AppError> {
    let raw: Vec<RawPayment> = read_snapshot(path)?;
    Ok(normalize_payments(raw))
}

fn read_snapshot<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, AppError> {
    let contents = fs::read_to_string(path).map_err(|source| AppError::SnapshotIo {
        path: path.to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| AppError::SnapshotDecode {
        path: path.to_string(),
        source,
    })
}

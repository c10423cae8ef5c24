//! Office/client attribution filter.

use serde::{Deserialize, Serialize};

use crate::voucher::Voucher;

/// What kind of counterparty a statement is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterpartyKind {
    /// A partner office that supplies services and may also buy vouchers.
    Office,
    /// An end customer billed directly, with no office intermediary.
    DirectClient,
}

/// The counterparty a statement is generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    /// Counterparty name, matched exactly against voucher attributions.
    pub name: String,
    /// Counterparty kind.
    pub kind: CounterpartyKind,
}

impl Counterparty {
    /// Creates an office counterparty.
    #[must_use]
    pub fn office(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: CounterpartyKind::Office,
        }
    }

    /// Creates a direct-client counterparty.
    #[must_use]
    pub fn direct_client(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: CounterpartyKind::DirectClient,
        }
    }
}

/// The two attribution views for one counterparty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribution {
    /// Vouchers with at least one service line billed to the counterparty.
    /// Always empty for a direct client.
    pub service_vouchers: Vec<Voucher>,
    /// Vouchers whose end customer is the counterparty.
    pub client_vouchers: Vec<Voucher>,
}

/// Returns true if any service line on the voucher is billed to the office.
fn provides_services_to(voucher: &Voucher, office: &str) -> bool {
    voucher
        .hotels
        .iter()
        .chain(&voucher.transfers)
        .chain(&voucher.flights)
        .any(|line| line.is_billed_to(office))
        || voucher.trips.attributes_to(office)
}

/// Returns true if the voucher's end customer is the counterparty.
fn is_client_of(voucher: &Voucher, counterparty: &Counterparty) -> bool {
    match counterparty.kind {
        CounterpartyKind::Office => voucher.office_name.as_deref() == Some(&counterparty.name),
        CounterpartyKind::DirectClient => {
            voucher.office_name.is_none() && voucher.client_name == counterparty.name
        }
    }
}

/// Partitions the voucher set into the counterparty's two attribution views.
///
/// The views are independent: a voucher billed to an office for services that
/// was also sold to that office as the client appears in both, and the two
/// attributions are never conflated.
#[must_use]
pub fn compute_attribution(vouchers: &[Voucher], counterparty: &Counterparty) -> Attribution {
    let service_vouchers = match counterparty.kind {
        // A direct client provides no services to the agency.
        CounterpartyKind::DirectClient => Vec::new(),
        CounterpartyKind::Office => vouchers
            .iter()
            .filter(|voucher| provides_services_to(voucher, &counterparty.name))
            .cloned()
            .collect(),
    };

    let client_vouchers = vouchers
        .iter()
        .filter(|voucher| is_client_of(voucher, counterparty))
        .cloned()
        .collect();

    Attribution {
        service_vouchers,
        client_vouchers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voucher::{ServiceLine, TripCharges};
    use caravel_shared::types::VoucherId;
    use chrono::{DateTime, Utc};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn line(office: &str, price: Decimal) -> ServiceLine {
        ServiceLine {
            office_name: Some(office.to_string()),
            price,
        }
    }

    fn voucher(id: &str, client: &str, office: Option<&str>) -> Voucher {
        Voucher {
            id: VoucherId::new(id),
            voucher_number: 1,
            client_name: client.to_string(),
            office_name: office.map(str::to_string),
            currency: None,
            total_amount: Decimal::ZERO,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            arrival_date: None,
            hotels: Vec::new(),
            transfers: Vec::new(),
            flights: Vec::new(),
            trips: TripCharges::None,
        }
    }

    #[test]
    fn test_service_attribution_matches_any_category() {
        let mut hotel = voucher("v1", "Client A", None);
        hotel.hotels.push(line("Acme", dec!(10)));

        let mut trip = voucher("v2", "Client B", None);
        trip.trips = TripCharges::Aggregate(line("Acme", dec!(20)));

        let unrelated = voucher("v3", "Client C", None);

        let attribution = compute_attribution(
            &[hotel.clone(), trip.clone(), unrelated],
            &Counterparty::office("Acme"),
        );

        assert_eq!(attribution.service_vouchers, vec![hotel, trip]);
        assert!(attribution.client_vouchers.is_empty());
    }

    #[test]
    fn test_client_attribution_for_office() {
        let sold_to_office = voucher("v1", "Traveler", Some("Acme"));
        let other = voucher("v2", "Traveler", Some("Globex"));

        let attribution =
            compute_attribution(&[sold_to_office.clone(), other], &Counterparty::office("Acme"));

        assert_eq!(attribution.client_vouchers, vec![sold_to_office]);
    }

    #[test]
    fn test_direct_client_requires_absent_office() {
        let direct = voucher("v1", "Jane", None);
        let via_office = voucher("v2", "Jane", Some("Acme"));

        let attribution =
            compute_attribution(&[direct.clone(), via_office], &Counterparty::direct_client("Jane"));

        assert_eq!(attribution.client_vouchers, vec![direct]);
        assert!(attribution.service_vouchers.is_empty());
    }

    #[test]
    fn test_direct_client_never_gets_service_vouchers() {
        let mut v = voucher("v1", "Jane", None);
        v.hotels.push(line("Jane", dec!(10)));

        let attribution = compute_attribution(&[v], &Counterparty::direct_client("Jane"));
        assert!(attribution.service_vouchers.is_empty());
    }

    #[test]
    fn test_voucher_can_appear_in_both_views() {
        let mut v = voucher("v1", "Traveler", Some("Acme"));
        v.transfers.push(line("Acme", dec!(15)));

        let attribution = compute_attribution(std::slice::from_ref(&v), &Counterparty::office("Acme"));

        assert_eq!(attribution.service_vouchers, vec![v.clone()]);
        assert_eq!(attribution.client_vouchers, vec![v]);
    }

    #[test]
    fn test_attribution_is_deterministic() {
        let mut v1 = voucher("v1", "A", Some("Acme"));
        v1.hotels.push(line("Acme", dec!(1)));
        let v2 = voucher("v2", "B", Some("Acme"));
        let set = vec![v1, v2];
        let counterparty = Counterparty::office("Acme");

        let first = compute_attribution(&set, &counterparty);
        let second = compute_attribution(&set, &counterparty);
        assert_eq!(first, second);
    }
}

//! Append-only ledger of service requests.
//!
//! A request pins the provider by [`ProviderId`], so rating
//! authorization matches the exact stored provider and never a
//! same-named lookalike.

use crate::catalog::CatalogEntry;
use crate::providers::ProviderId;
use chrono::{DateTime, Local};
use tracing::info;

/// A record linking a user, a provider, a service and a duration.
#[derive(Debug, Clone)]
pub struct ServiceRequest {
    user_id: u32,
    provider: ProviderId,
    service: CatalogEntry,
    hours: u32,
    requested_at: DateTime<Local>,
}

impl ServiceRequest {
    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    pub fn provider(&self) -> ProviderId {
        self.provider
    }

    pub fn service(&self) -> &CatalogEntry {
        &self.service
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn requested_at(&self) -> DateTime<Local> {
        self.requested_at
    }
}

/// Every request ever submitted, in submission order.
#[derive(Debug, Default)]
pub struct RequestLedger {
    requests: Vec<ServiceRequest>,
}

impl RequestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request and return a copy of the stored record.
    pub fn record(
        &mut self,
        user_id: u32,
        provider: ProviderId,
        service: CatalogEntry,
        hours: u32,
    ) -> ServiceRequest {
        let request = ServiceRequest {
            user_id,
            provider,
            service,
            hours,
            requested_at: Local::now(),
        };
        info!(
            "Recorded request: user {} -> '{}' for {} hour(s)",
            user_id,
            request.service.name(),
            hours
        );
        self.requests.push(request.clone());
        request
    }

    /// Whether the user has ever requested anything from this exact provider.
    pub fn has_request(&self, user_id: u32, provider: ProviderId) -> bool {
        self.requests
            .iter()
            .any(|r| r.user_id == user_id && r.provider == provider)
    }

    pub fn requests(&self) -> &[ServiceRequest] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{ProviderRegistry, ServiceProvider};

    #[test]
    fn has_request_matches_on_provider_identity() {
        let mut registry = ProviderRegistry::new();
        let alice = registry.register(ServiceProvider::new("Alice", "a", 10.0));
        let alice_twin = registry.register(ServiceProvider::new("Alice", "b", 12.0));

        let mut ledger = RequestLedger::new();
        ledger.record(1, alice, CatalogEntry::cleaning("Mop", true), 2);

        assert!(ledger.has_request(1, alice));
        // Same name, different stored provider: no authorization.
        assert!(!ledger.has_request(1, alice_twin));
        // Different user against the right provider: no authorization.
        assert!(!ledger.has_request(2, alice));
    }

    #[test]
    fn record_appends_in_order() {
        let mut registry = ProviderRegistry::new();
        let id = registry.register(ServiceProvider::new("Alice", "a", 10.0));

        let mut ledger = RequestLedger::new();
        ledger.record(1, id, CatalogEntry::cleaning("Mop", true), 2);
        ledger.record(2, id, CatalogEntry::cleaning("Dust", false), 4);

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.requests()[0].user_id(), 1);
        assert_eq!(ledger.requests()[1].hours(), 4);
    }
}

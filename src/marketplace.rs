//! Marketplace facade: the single source of truth the driver talks to.
//!
//! Composes the catalog, the user and provider registries and the
//! request ledger. The interactive driver only ever goes through this
//! type, so every invariant (contact uniqueness, rating authorization,
//! identity-stable provider references) is enforced in one place.

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{MarketError, Result};
use crate::providers::{ProviderId, ProviderRegistry, ServiceProvider};
use crate::requests::{RequestLedger, ServiceRequest};
use crate::users::{UserProfile, UserRegistry};

#[derive(Debug, Default)]
pub struct Marketplace {
    catalog: Catalog,
    users: UserRegistry,
    providers: ProviderRegistry,
    ledger: RequestLedger,
}

impl Marketplace {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    pub fn add_catalog_entry(&mut self, entry: CatalogEntry) {
        self.catalog.add(entry);
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // ------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------

    pub fn register_user(&mut self, name: &str, contact: &str) -> Result<UserProfile> {
        self.users.register(name, contact)
    }

    pub fn is_contact_registered(&self, contact: &str) -> bool {
        self.users.is_registered(contact)
    }

    pub fn user_by_id(&self, user_id: u32) -> Option<&UserProfile> {
        self.users.find_by_id(user_id)
    }

    pub fn has_users(&self) -> bool {
        !self.users.is_empty()
    }

    // ------------------------------------------------------------------
    // Providers
    // ------------------------------------------------------------------

    pub fn register_provider(&mut self, provider: ServiceProvider) -> ProviderId {
        self.providers.register(provider)
    }

    pub fn provider(&self, id: ProviderId) -> Option<&ServiceProvider> {
        self.providers.get(id)
    }

    pub fn providers_offering(&self, service_name: &str) -> Vec<ProviderId> {
        self.providers.find_by_service(service_name)
    }

    pub fn has_providers(&self) -> bool {
        !self.providers.is_empty()
    }

    // ------------------------------------------------------------------
    // Requests and ratings
    // ------------------------------------------------------------------

    /// Record a service request after resolving every reference.
    ///
    /// The service is the provider's first offering whose name matches
    /// `service_name` (the provider's own copy, not the catalog's).
    pub fn submit_request(
        &mut self,
        user_id: u32,
        provider_id: ProviderId,
        service_name: &str,
        hours: u32,
    ) -> Result<ServiceRequest> {
        if self.users.find_by_id(user_id).is_none() {
            return Err(MarketError::UserNotFound { user_id });
        }
        let provider = self
            .providers
            .get(provider_id)
            .ok_or_else(|| MarketError::ProviderNotFound {
                name: provider_id.to_string(),
            })?;
        let service = provider
            .find_service(service_name)
            .ok_or_else(|| MarketError::ServiceNotFound {
                name: service_name.to_string(),
            })?
            .clone();
        if hours == 0 {
            return Err(MarketError::InvalidHours);
        }

        Ok(self.ledger.record(user_id, provider_id, service, hours))
    }

    pub fn requests(&self) -> &[ServiceRequest] {
        self.ledger.requests()
    }

    /// Rate a provider on behalf of a user.
    ///
    /// The provider is resolved by name (first match in registration
    /// order) and the rating lands on that stored record. A user may
    /// only rate a provider they have a recorded request with.
    pub fn rate_provider(&mut self, user_id: u32, provider_name: &str, rating: i32) -> Result<()> {
        if self.users.find_by_id(user_id).is_none() {
            return Err(MarketError::UserNotFound { user_id });
        }
        let provider_id = self
            .providers
            .find_by_name(provider_name)
            .ok_or_else(|| MarketError::ProviderNotFound {
                name: provider_name.to_string(),
            })?;
        if !self.ledger.has_request(user_id, provider_id) {
            return Err(MarketError::RatingNotAuthorized);
        }
        self.providers.add_rating(provider_id, rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marketplace_with_mop_provider() -> (Marketplace, ProviderId) {
        let mut market = Marketplace::new();
        market.add_catalog_entry(CatalogEntry::cleaning("Mop", true));

        let mut provider = ServiceProvider::new("Alice", "alice@clean.io", 10.0);
        provider.add_service(market.catalog().find_by_name("Mop").unwrap().clone());
        let id = market.register_provider(provider);
        (market, id)
    }

    #[test]
    fn rate_provider_requires_known_user() {
        let (mut market, _) = marketplace_with_mop_provider();
        assert_eq!(
            market.rate_provider(9, "Alice", 4).unwrap_err(),
            MarketError::UserNotFound { user_id: 9 }
        );
    }

    #[test]
    fn rate_provider_requires_known_provider() {
        let (mut market, _) = marketplace_with_mop_provider();
        market.register_user("Ursula", "u@example.com").unwrap();
        assert_eq!(
            market.rate_provider(1, "Nobody", 4).unwrap_err(),
            MarketError::ProviderNotFound {
                name: "Nobody".to_string()
            }
        );
    }

    #[test]
    fn rate_provider_requires_a_prior_request() {
        let (mut market, _) = marketplace_with_mop_provider();
        market.register_user("Ursula", "u@example.com").unwrap();
        assert_eq!(
            market.rate_provider(1, "Alice", 4).unwrap_err(),
            MarketError::RatingNotAuthorized
        );
    }

    #[test]
    fn authorization_is_checked_before_rating_range() {
        let (mut market, _) = marketplace_with_mop_provider();
        market.register_user("Ursula", "u@example.com").unwrap();
        // No request yet: the out-of-range rating still fails on authorization.
        assert_eq!(
            market.rate_provider(1, "Alice", 7).unwrap_err(),
            MarketError::RatingNotAuthorized
        );
    }

    #[test]
    fn submit_request_rejects_zero_hours() {
        let (mut market, id) = marketplace_with_mop_provider();
        market.register_user("Ursula", "u@example.com").unwrap();
        assert_eq!(
            market.submit_request(1, id, "Mop", 0).unwrap_err(),
            MarketError::InvalidHours
        );
        assert!(market.requests().is_empty());
    }

    #[test]
    fn submit_request_rejects_services_the_provider_lacks() {
        let (mut market, id) = marketplace_with_mop_provider();
        market.register_user("Ursula", "u@example.com").unwrap();
        assert_eq!(
            market.submit_request(1, id, "Windows", 2).unwrap_err(),
            MarketError::ServiceNotFound {
                name: "Windows".to_string()
            }
        );
    }

    #[test]
    fn request_then_rate_lands_on_the_stored_provider() {
        let (mut market, id) = marketplace_with_mop_provider();
        let user = market.register_user("Ursula", "u@example.com").unwrap();

        market.submit_request(user.user_id(), id, "Mop", 3).unwrap();
        market.rate_provider(user.user_id(), "Alice", 4).unwrap();

        let stored = market.provider(id).unwrap();
        assert!((stored.average_rating() - 4.0).abs() < f64::EPSILON);
    }
}

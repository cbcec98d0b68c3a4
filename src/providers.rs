//! Provider registry: providers behind stable IDs, service queries,
//! rating mutation on the canonical stored record.
//!
//! Every cross-reference to a provider (in requests, in query results)
//! carries a [`ProviderId`] rather than a copy of the record, so a
//! rating applied through the ID is always visible to later reads and
//! two providers sharing a name are never confused with each other.

use crate::catalog::CatalogEntry;
use crate::error::{MarketError, Result};
use std::fmt;
use tracing::{info, warn};

/// Stable handle to a provider inside a [`ProviderRegistry`].
///
/// Providers are never removed, so the underlying index never moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderId(usize);

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "provider #{}", self.0)
    }
}

/// An entity offering one or more catalog services at a fixed hourly rate.
#[derive(Debug, Clone)]
pub struct ServiceProvider {
    name: String,
    contact: String,
    hourly_rate: f64,
    services: Vec<CatalogEntry>,
    ratings: Vec<u8>,
}

impl ServiceProvider {
    pub fn new(name: impl Into<String>, contact: impl Into<String>, hourly_rate: f64) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
            hourly_rate,
            services: Vec::new(),
            ratings: Vec::new(),
        }
    }

    /// Attach an offering. The provider keeps its own copy of the entry.
    pub fn add_service(&mut self, entry: CatalogEntry) {
        self.services.push(entry);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    pub fn services(&self) -> &[CatalogEntry] {
        &self.services
    }

    pub fn offers(&self, service_name: &str) -> bool {
        self.services.iter().any(|s| s.name() == service_name)
    }

    /// First offering matching the given name, if any.
    pub fn find_service(&self, service_name: &str) -> Option<&CatalogEntry> {
        self.services.iter().find(|s| s.name() == service_name)
    }

    pub fn ratings(&self) -> &[u8] {
        &self.ratings
    }

    /// Arithmetic mean of all ratings, `0.0` when there are none.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.ratings.iter().map(|&r| u32::from(r)).sum();
        f64::from(sum) / self.ratings.len() as f64
    }
}

/// Registry of providers in registration order.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    providers: Vec<ServiceProvider>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a provider and hand back its stable ID.
    pub fn register(&mut self, provider: ServiceProvider) -> ProviderId {
        info!(
            "Registered provider '{}' offering {} service(s)",
            provider.name(),
            provider.services().len()
        );
        self.providers.push(provider);
        ProviderId(self.providers.len() - 1)
    }

    pub fn get(&self, id: ProviderId) -> Option<&ServiceProvider> {
        self.providers.get(id.0)
    }

    /// First provider with the given name, in registration order.
    pub fn find_by_name(&self, name: &str) -> Option<ProviderId> {
        self.providers
            .iter()
            .position(|p| p.name() == name)
            .map(ProviderId)
    }

    /// Every provider offering at least one entry with the given name,
    /// in registration order.
    pub fn find_by_service(&self, service_name: &str) -> Vec<ProviderId> {
        self.providers
            .iter()
            .enumerate()
            .filter(|(_, p)| p.offers(service_name))
            .map(|(i, _)| ProviderId(i))
            .collect()
    }

    /// Append a rating to the stored provider record.
    pub fn add_rating(&mut self, id: ProviderId, rating: i32) -> Result<()> {
        if !(1..=5).contains(&rating) {
            warn!("Rejected out-of-range rating {}", rating);
            return Err(MarketError::InvalidRating { rating });
        }
        let provider = self
            .providers
            .get_mut(id.0)
            .ok_or_else(|| MarketError::ProviderNotFound {
                name: id.to_string(),
            })?;
        provider.ratings.push(rating as u8);
        info!(
            "Provider '{}' rated {}; average now {:.2}",
            provider.name(),
            rating,
            provider.average_rating()
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

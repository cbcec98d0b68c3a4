//! fixly - an interactive, in-memory marketplace for home services
//!
//! This library provides the marketplace model (catalog, user and
//! provider registries, request ledger) behind a single facade, plus
//! the menu-driven text interface that drives it.

// Core modules
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod marketplace;
pub mod providers;
pub mod requests;
pub mod users;

// Re-exports for convenience
pub use catalog::{Catalog, CatalogEntry, ServiceKind};
pub use config::MarketConfig;
pub use error::MarketError;
pub use marketplace::Marketplace;
pub use providers::{ProviderId, ProviderRegistry, ServiceProvider};
pub use requests::{RequestLedger, ServiceRequest};
pub use users::{UserProfile, UserRegistry};

//! Service catalog: named offerings with a per-kind cost rule.

use std::fmt;

/// Flat surcharge applied when a cleaning service brings its own materials.
pub const MATERIAL_SURCHARGE: f64 = 20.0;

/// The kind of work a catalog entry describes.
///
/// Only cleaning exists today; the enum keeps further kinds additive,
/// each with its own parameters folded into `CatalogEntry::cost`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceKind {
    Cleaning { uses_own_materials: bool },
}

/// A named, priceable service offering.
///
/// Entries are immutable once created. Providers hold their own clones,
/// so later catalog changes never affect an already-registered provider.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    name: String,
    kind: ServiceKind,
}

impl CatalogEntry {
    pub fn cleaning(name: impl Into<String>, uses_own_materials: bool) -> Self {
        Self {
            name: name.into(),
            kind: ServiceKind::Cleaning { uses_own_materials },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &ServiceKind {
        &self.kind
    }

    /// Total cost of this service for the given duration and rate.
    pub fn cost(&self, hours: u32, hourly_rate: f64) -> f64 {
        match self.kind {
            ServiceKind::Cleaning { uses_own_materials } => {
                let material_cost = if uses_own_materials {
                    MATERIAL_SURCHARGE
                } else {
                    0.0
                };
                f64::from(hours) * hourly_rate + material_cost
            }
        }
    }
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Service: {}", self.name)?;
        match self.kind {
            ServiceKind::Cleaning { uses_own_materials } => {
                write!(
                    f,
                    "Uses Own Materials: {}",
                    if uses_own_materials { "Yes" } else { "No" }
                )
            }
        }
    }
}

/// The marketplace-wide list of offerings.
///
/// Duplicate names are allowed; name lookups return the first match in
/// insertion order.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_adds_surcharge_when_materials_provided() {
        let entry = CatalogEntry::cleaning("Mop", true);
        assert!((entry.cost(3, 10.0) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn cost_without_materials_is_plain_hourly() {
        let entry = CatalogEntry::cleaning("Mop", false);
        assert!((entry.cost(3, 10.0) - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn find_by_name_returns_first_match() {
        let mut catalog = Catalog::new();
        catalog.add(CatalogEntry::cleaning("Mop", true));
        catalog.add(CatalogEntry::cleaning("Mop", false));

        let found = catalog.find_by_name("Mop").unwrap();
        assert_eq!(found.kind(), &ServiceKind::Cleaning { uses_own_materials: true });
    }

    #[test]
    fn find_by_name_misses_unknown_service() {
        let catalog = Catalog::new();
        assert!(catalog.find_by_name("Windows").is_none());
    }
}

//! User registry: profiles keyed by sequential IDs, contacts kept unique.

use crate::error::{MarketError, Result};
use std::collections::HashSet;
use std::fmt;
use tracing::info;

/// A registered marketplace user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    user_id: u32,
    name: String,
    contact: String,
}

impl UserProfile {
    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User Profile:")?;
        writeln!(f, "User ID: {}", self.user_id)?;
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Contact: {}", self.contact)
    }
}

/// Registry of user profiles.
///
/// IDs are assigned 1, 2, 3, … in registration order; a rejected
/// registration consumes no ID. Contacts are unique across all users.
#[derive(Debug)]
pub struct UserRegistry {
    users: Vec<UserProfile>,
    contacts: HashSet<String>,
    next_id: u32,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            contacts: HashSet::new(),
            next_id: 1,
        }
    }

    /// Register a new user, failing if the contact is already taken.
    ///
    /// Returns a copy of the stored profile for display.
    pub fn register(&mut self, name: &str, contact: &str) -> Result<UserProfile> {
        if self.is_registered(contact) {
            return Err(MarketError::DuplicateContact {
                contact: contact.to_string(),
            });
        }

        let profile = UserProfile {
            user_id: self.next_id,
            name: name.to_string(),
            contact: contact.to_string(),
        };
        self.next_id += 1;
        self.contacts.insert(profile.contact.clone());
        self.users.push(profile.clone());

        info!("Registered user '{}' with ID {}", name, profile.user_id);
        Ok(profile)
    }

    pub fn is_registered(&self, contact: &str) -> bool {
        self.contacts.contains(contact)
    }

    pub fn find_by_id(&self, user_id: u32) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.user_id == user_id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_assigns_sequential_ids() {
        let mut registry = UserRegistry::new();
        let id1 = registry.register("Ada", "ada@example.com").unwrap().user_id();
        let id2 = registry.register("Brin", "brin@example.com").unwrap().user_id();
        assert_eq!(id1, 1);
        assert_eq!(id2, 2);
    }

    #[test]
    fn duplicate_contact_is_rejected_and_consumes_no_id() {
        let mut registry = UserRegistry::new();
        registry.register("Ada", "ada@example.com").unwrap();

        let err = registry.register("Imposter", "ada@example.com").unwrap_err();
        assert_eq!(
            err,
            MarketError::DuplicateContact {
                contact: "ada@example.com".to_string()
            }
        );
        assert_eq!(registry.len(), 1);

        // The failed attempt must not have burned an ID.
        let id = registry.register("Brin", "brin@example.com").unwrap().user_id();
        assert_eq!(id, 2);
    }

    #[test]
    fn find_by_id_misses_unknown_user() {
        let registry = UserRegistry::new();
        assert!(registry.find_by_id(42).is_none());
    }
}

//! Typed failure kinds for marketplace operations.
//!
//! Every model operation that can fail returns one of these variants so
//! the interactive driver can print a specific message and carry on.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    #[error("A user with contact '{contact}' is already registered")]
    DuplicateContact { contact: String },

    #[error("User with user ID {user_id} not found")]
    UserNotFound { user_id: u32 },

    #[error("Service provider with name '{name}' not found")]
    ProviderNotFound { name: String },

    #[error("Service '{name}' not found")]
    ServiceNotFound { name: String },

    #[error("You must request a service from this provider at least once before rating")]
    RatingNotAuthorized,

    #[error("Invalid rating {rating}. Rating must be between 1 and 5")]
    InvalidRating { rating: i32 },

    #[error("Invalid choice {choice}. Pick a number between 1 and {max}")]
    InvalidSelection { choice: usize, max: usize },

    #[error("Invalid number of hours. Hours must be at least 1")]
    InvalidHours,
}

pub type Result<T> = std::result::Result<T, MarketError>;

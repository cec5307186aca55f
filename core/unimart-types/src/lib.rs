//! Core type definitions for Unimart.
//!
//! This crate defines the small set of types shared by every other crate:
//! - Listing and user identifiers
//! - The crate-wide error type
//!
//! Listing records themselves live in `unimart-model`.

mod ids;

pub use ids::{ListingId, UserId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("invalid listing: {0}")]
    InvalidListing(String),
}

//! Listing model for Unimart.
//!
//! Defines the records the query engine operates over:
//! - [`Listing`] — an item posted for sale, as stored by the listing backend
//! - [`ListingDraft`] — the seller-supplied fields of a listing before it is published
//!
//! Optional counters and flags coming from the store (`views`, `deleted`)
//! are normalized while deserializing, so downstream code never has to
//! distinguish "absent" from the default value.

mod draft;
mod listing;

pub use draft::ListingDraft;
pub use listing::Listing;

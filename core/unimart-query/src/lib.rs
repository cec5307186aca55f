//! Listing activity and query engine.
//!
//! Pure, synchronous projections over an in-memory slice of [`Listing`]s:
//! - soft-delete filtering ([`filter_active`])
//! - popularity ranking ([`top_by_views`], [`trending`])
//! - location, seller-name and ownership filters
//! - a composite [`ListingQuery`] for search pages
//!
//! Every function borrows its input and returns a new `Vec` of references;
//! nothing here mutates a listing or talks to the store.

mod filters;
pub mod mock;
mod query;

pub use filters::{
    filter_active, filter_by_location, filter_by_seller, filter_by_user_id, generate_listing_id,
    is_active, top_by_views, trending, DEFAULT_TOP_COUNT,
};
pub use query::{ListingQuery, SortOrder};

pub use unimart_model::Listing;

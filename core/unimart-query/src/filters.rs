use std::cmp::Reverse;

use tracing::debug;
use unimart_model::Listing;
use unimart_types::ListingId;

/// Number of listings shown in the "popular" strip when no count is given.
pub const DEFAULT_TOP_COUNT: usize = 4;

/// Returns `true` unless the listing has been soft-deleted.
pub fn is_active(listing: &Listing) -> bool {
    listing.is_active()
}

/// Active listings, in input order.
pub fn filter_active(listings: &[Listing]) -> Vec<&Listing> {
    let active: Vec<&Listing> = listings.iter().filter(|l| l.is_active()).collect();
    debug!(input = listings.len(), active = active.len(), "filter_active");
    active
}

/// The `count` most viewed active listings, most viewed first.
///
/// Ties keep their input order.
pub fn top_by_views(listings: &[Listing], count: usize) -> Vec<&Listing> {
    let mut ranked = filter_active(listings);
    // sort_by_key is stable
    ranked.sort_by_key(|l| Reverse(l.views));
    ranked.truncate(count);
    debug!(input = listings.len(), count, returned = ranked.len(), "top_by_views");
    ranked
}

/// [`top_by_views`] with [`DEFAULT_TOP_COUNT`].
pub fn trending(listings: &[Listing]) -> Vec<&Listing> {
    top_by_views(listings, DEFAULT_TOP_COUNT)
}

/// Active listings whose location contains `location`, ignoring case.
///
/// A blank query applies no location constraint. Listings without a
/// location never match a non-blank query.
pub fn filter_by_location<'a>(listings: &'a [Listing], location: &str) -> Vec<&'a Listing> {
    if location.trim().is_empty() {
        return filter_active(listings);
    }

    let matched: Vec<&Listing> = listings
        .iter()
        .filter(|l| l.is_active() && location_matches(l, location))
        .collect();
    debug!(input = listings.len(), location, matched = matched.len(), "filter_by_location");
    matched
}

/// Location predicate shared by [`filter_by_location`] and the composite
/// query. A blank query matches everything; otherwise the listing's
/// location must contain the query, ignoring case.
pub(crate) fn location_matches(listing: &Listing, location: &str) -> bool {
    if location.trim().is_empty() {
        return true;
    }
    let needle = location.to_lowercase();
    listing
        .location
        .as_deref()
        .is_some_and(|loc| loc.to_lowercase().contains(&needle))
}

/// Active listings whose seller display name is exactly `seller`.
///
/// Display names are not unique; prefer [`filter_by_user_id`] when the
/// seller's id is known.
pub fn filter_by_seller<'a>(listings: &'a [Listing], seller: &str) -> Vec<&'a Listing> {
    let matched: Vec<&Listing> = listings
        .iter()
        .filter(|l| l.is_active() && l.seller == seller)
        .collect();
    debug!(input = listings.len(), seller, matched = matched.len(), "filter_by_seller");
    matched
}

/// Active listings owned by `user_id` (exact, case-sensitive match).
pub fn filter_by_user_id<'a>(listings: &'a [Listing], user_id: &str) -> Vec<&'a Listing> {
    let matched: Vec<&Listing> = listings
        .iter()
        .filter(|l| l.is_active() && l.seller_id == user_id)
        .collect();
    debug!(input = listings.len(), user_id, matched = matched.len(), "filter_by_user_id");
    matched
}

/// Generates a listing id from the current timestamp and a random
/// component. See [`ListingId::generate`].
pub fn generate_listing_id() -> ListingId {
    ListingId::generate()
}

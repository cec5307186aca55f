use std::cmp::Reverse;

use serde::{Deserialize, Serialize};
use tracing::debug;
use unimart_model::Listing;
use unimart_types::UserId;

use crate::filters::location_matches;

/// Ordering applied by [`ListingQuery::apply`]. All orders are stable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Most recently posted first.
    #[default]
    Newest,
    Oldest,
    PriceLowToHigh,
    PriceHighToLow,
    MostViewed,
}

/// The combined filters of a search page.
///
/// Unset or blank criteria impose no constraint; set criteria combine
/// conjunctively. Soft-deleted listings are always excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingQuery {
    /// Exact category, compared case-insensitively.
    pub category: Option<String>,
    /// Location substring, compared case-insensitively.
    pub location: Option<String>,
    /// Text matched against title and description, case-insensitively.
    pub search: Option<String>,
    /// Restrict to one seller's listings.
    pub seller_id: Option<UserId>,
    pub sort: SortOrder,
    pub limit: Option<usize>,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn seller_id(mut self, seller_id: impl Into<UserId>) -> Self {
        self.seller_id = Some(seller_id.into());
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns `true` if `listing` is active and satisfies every criterion.
    pub fn matches(&self, listing: &Listing) -> bool {
        if !listing.is_active() {
            return false;
        }

        if let Some(category) = non_blank(self.category.as_deref()) {
            let wanted = category.trim().to_lowercase();
            let matched = listing
                .category
                .as_deref()
                .is_some_and(|c| c.trim().to_lowercase() == wanted);
            if !matched {
                return false;
            }
        }

        if let Some(location) = self.location.as_deref()
            && !location_matches(listing, location)
        {
            return false;
        }

        if let Some(text) = non_blank(self.search.as_deref()) {
            let needle = text.trim().to_lowercase();
            let in_title = listing.title.to_lowercase().contains(&needle);
            let in_description = listing
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
            if !in_title && !in_description {
                return false;
            }
        }

        if let Some(seller_id) = &self.seller_id
            && &listing.seller_id != seller_id
        {
            return false;
        }

        true
    }

    /// Filters, sorts and truncates `listings`.
    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        let mut matched: Vec<&Listing> = listings.iter().filter(|l| self.matches(l)).collect();

        match self.sort {
            SortOrder::Newest => matched.sort_by_key(|l| Reverse(l.posted_time)),
            SortOrder::Oldest => matched.sort_by_key(|l| l.posted_time),
            SortOrder::PriceLowToHigh => matched.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortOrder::PriceHighToLow => matched.sort_by(|a, b| b.price.total_cmp(&a.price)),
            SortOrder::MostViewed => matched.sort_by_key(|l| Reverse(l.views)),
        }

        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }

        debug!(
            input = listings.len(),
            returned = matched.len(),
            sort = ?self.sort,
            "listing query applied"
        );
        matched
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

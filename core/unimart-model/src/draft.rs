use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unimart_types::{ListingId, Result, UserId};

use crate::Listing;

/// Seller-supplied fields of a listing that has not been published yet.
///
/// Forms submit empty strings for untouched optional inputs; those are
/// stored as `None` when the draft is published.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ListingDraft {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
            ..Self::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Publishes the draft with a freshly generated id and the current time.
    pub fn publish(self, seller: impl Into<String>, seller_id: impl Into<UserId>) -> Result<Listing> {
        self.publish_with(ListingId::generate(), Utc::now(), seller, seller_id)
    }

    /// Publishes the draft with a caller-chosen id and timestamp, e.g. one
    /// assigned by the store.
    pub fn publish_with(
        self,
        id: ListingId,
        posted_time: DateTime<Utc>,
        seller: impl Into<String>,
        seller_id: impl Into<UserId>,
    ) -> Result<Listing> {
        let listing = Listing {
            id,
            title: self.title.trim().to_string(),
            price: self.price,
            category: non_blank(self.category),
            location: non_blank(self.location),
            seller: seller.into(),
            seller_id: seller_id.into(),
            posted_time,
            views: 0,
            deleted: false,
            description: non_blank(self.description),
            condition: non_blank(self.condition),
            image_url: non_blank(self.image_url),
        };
        listing.validate()?;
        Ok(listing)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

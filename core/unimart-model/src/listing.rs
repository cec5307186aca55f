use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use unimart_types::{Error, ListingId, Result, UserId};

/// An item posted for sale.
///
/// Field names follow the store's camelCase rows (`sellerId`, `postedTime`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Display name of the seller. Not unique and may change over time.
    pub seller: String,
    /// Stable id of the seller; use this for ownership checks.
    pub seller_id: UserId,
    /// ISO 8601. A timestamp without an offset is read as UTC.
    #[serde(deserialize_with = "posted_time_from_iso8601")]
    pub posted_time: DateTime<Utc>,
    /// Popularity counter. Missing or `null` in the row reads as 0; integral
    /// floats such as `5.0` are accepted.
    #[serde(default, deserialize_with = "views_from_number")]
    pub views: u64,
    /// Soft-delete flag. Missing or `null` in the row reads as `false`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Listing {
    /// Creates an active listing with no views and no optional fields set.
    pub fn new(
        id: impl Into<ListingId>,
        title: impl Into<String>,
        price: f64,
        seller: impl Into<String>,
        seller_id: impl Into<UserId>,
        posted_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            category: None,
            location: None,
            seller: seller.into(),
            seller_id: seller_id.into(),
            posted_time,
            views: 0,
            deleted: false,
            description: None,
            condition: None,
            image_url: None,
        }
    }

    /// A listing is active unless it has been soft-deleted.
    pub fn is_active(&self) -> bool {
        !self.deleted
    }

    /// Parses a single store row.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses an array of store rows.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the shape constraints the store is expected to uphold.
    ///
    /// Query functions do not call this; it is for callers that accept
    /// listings from untrusted sources.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(Error::InvalidListing("id is blank".into()));
        }
        if self.title.trim().is_empty() {
            return Err(Error::InvalidListing(format!("listing {} has a blank title", self.id)));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(Error::InvalidListing(format!(
                "listing {} has invalid price {}",
                self.id, self.price
            )));
        }
        if self.seller.trim().is_empty() {
            return Err(Error::InvalidListing(format!("listing {} has a blank seller", self.id)));
        }
        if self.seller_id.as_str().trim().is_empty() {
            return Err(Error::InvalidListing(format!("listing {} has a blank seller id", self.id)));
        }
        Ok(())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn views_from_number<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(0);
    };
    if let Some(views) = number.as_u64() {
        return Ok(views);
    }
    match number.as_f64() {
        Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            Ok(f as u64)
        }
        _ => Err(D::Error::custom(format!(
            "views must be a non-negative whole number, got {number}"
        ))),
    }
}

fn posted_time_from_iso8601<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(at) = raw.parse::<DateTime<Utc>>() {
        return Ok(at);
    }
    raw.parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc())
        .map_err(|e| D::Error::custom(format!("invalid postedTime {raw:?}: {e}")))
}

//! Identifier types used throughout Unimart.
//!
//! Ids arrive from the external store as opaque strings, so both types wrap
//! a `String`. Locally generated listing ids use UUID v7, which embeds the
//! creation millisecond followed by random bits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::{Uuid, Version};

use crate::Error;

/// Identifier of a listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    /// Generates a new listing id from the current timestamp and a random
    /// component.
    ///
    /// Collisions are extremely unlikely but not impossible; the listing
    /// store remains the authority on uniqueness.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Parses a listing id, rejecting blank input.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.trim().is_empty() {
            return Err(Error::InvalidId("listing id is blank".into()));
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the millisecond timestamp embedded in a generated id.
    ///
    /// `None` for anything that is not a UUID v7, including store-assigned
    /// v1/v6 UUIDs that carry their own timestamps.
    #[must_use]
    pub fn generated_at_millis(&self) -> Option<u64> {
        let uuid = Uuid::parse_str(&self.0).ok()?;
        if uuid.get_version() != Some(Version::SortRand) {
            return None;
        }
        let (secs, nanos) = uuid.get_timestamp()?.to_unix();
        Some(secs * 1000 + u64::from(nanos) / 1_000_000)
    }
}

impl From<&str> for ListingId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ListingId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ListingId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq<str> for ListingId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ListingId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Stable identifier of a user, as issued by the authentication provider.
///
/// Compared byte-for-byte; never case-folded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Parses a user id, rejecting blank input.
    pub fn parse(s: &str) -> Result<Self, Error> {
        if s.trim().is_empty() {
            return Err(Error::InvalidId("user id is blank".into()));
        }
        Ok(Self(s.to_string()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UserId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl PartialEq<str> for UserId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for UserId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

use chrono::{DateTime, Duration, Utc};

use crate::{SessionError, SessionResult};

/// Tracks when the provider's session stops being valid.
///
/// All queries take `now` explicitly so callers control the clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpiryState {
    expires_at: Option<DateTime<Utc>>,
}

impl ExpiryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new expiry. Rejects instants at or before `now`.
    pub fn set(&mut self, expires_at: DateTime<Utc>, now: DateTime<Utc>) -> SessionResult<()> {
        if expires_at <= now {
            return Err(SessionError::ExpiryInPast);
        }
        self.expires_at = Some(expires_at);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.expires_at = None;
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// A session with no known expiry never reports as expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| at <= now)
    }

    /// Time left before expiry; zero once expired, `None` if unknown.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.expires_at
            .map(|at| (at - now).max(Duration::zero()))
    }

    /// True when the session lapses within `window` of `now`.
    pub fn expires_within(&self, window: Duration, now: DateTime<Utc>) -> bool {
        self.remaining(now).is_some_and(|left| left <= window)
    }

    pub fn snapshot(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

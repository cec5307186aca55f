use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use unimart_types::UserId;

use crate::{
    Credentials, CredentialsState, ExpiryState, Profile, ProfileState, ProfileUpdate, SessionError,
    SessionResult,
};

/// Everything the app knows about the current session at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub user: Option<Credentials>,
    pub profile: Option<Profile>,
    pub expires_at: Option<DateTime<Utc>>,
    pub is_expired: bool,
    /// Signed in and not expired.
    pub is_authenticated: bool,
}

impl SessionSnapshot {
    /// The id to pass to ownership queries such as "my listings".
    ///
    /// `None` unless the session is authenticated.
    pub fn user_id(&self) -> Option<&UserId> {
        if !self.is_authenticated {
            return None;
        }
        self.user.as_ref().map(|c| &c.user_id)
    }

    /// Name to show in the header: the profile name, else the email.
    pub fn display_name(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .map(|p| p.display_name.as_str())
            .or_else(|| self.user.as_ref().map(|c| c.email.as_str()))
    }
}

/// Aggregates the three pieces of session state.
#[derive(Debug, Clone, Default)]
pub struct Session {
    credentials: CredentialsState,
    profile: ProfileState,
    expiry: ExpiryState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a successful sign-in reported by the auth provider.
    ///
    /// Nothing is changed if `expires_at` is not after `now`.
    pub fn sign_in(
        &mut self,
        credentials: Credentials,
        profile: Profile,
        expires_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> SessionResult<SessionSnapshot> {
        let mut expiry = ExpiryState::new();
        expiry.set(expires_at, now)?;

        info!(user_id = %credentials.user_id, %expires_at, "Session signed in");
        if let Some(previous) = self.credentials.sign_in(credentials) {
            debug!(user_id = %previous.user_id, "Replaced previous session");
        }
        self.profile.load(profile);
        self.expiry = expiry;
        Ok(self.snapshot_at(now))
    }

    /// Clears credentials, profile and expiry together.
    pub fn sign_out(&mut self) {
        if let Some(previous) = self.credentials.sign_out() {
            info!(user_id = %previous.user_id, "Session signed out");
        }
        self.profile.clear();
        self.expiry.clear();
    }

    /// Applies a profile change for the signed-in user.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> SessionResult<&Profile> {
        if !self.credentials.is_signed_in() {
            return Err(SessionError::NotSignedIn);
        }
        debug!(?update, "Applying profile update");
        self.profile.apply(update)
    }

    /// Records a new expiry after the provider refreshed the session.
    pub fn refresh_expiry(&mut self, expires_at: DateTime<Utc>, now: DateTime<Utc>) -> SessionResult<()> {
        if !self.credentials.is_signed_in() {
            return Err(SessionError::NotSignedIn);
        }
        self.expiry.set(expires_at, now)?;
        debug!(%expires_at, "Session expiry refreshed");
        Ok(())
    }

    pub fn credentials(&self) -> &CredentialsState {
        &self.credentials
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn expiry(&self) -> &ExpiryState {
        &self.expiry
    }

    /// Merges the current state of every piece into one snapshot.
    pub fn snapshot_at(&self, now: DateTime<Utc>) -> SessionSnapshot {
        let user = self.credentials.snapshot();
        let is_expired = self.expiry.is_expired(now);
        SessionSnapshot {
            is_authenticated: user.is_some() && !is_expired,
            user,
            profile: self.profile.snapshot(),
            expires_at: self.expiry.snapshot(),
            is_expired,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.snapshot_at(Utc::now())
    }
}

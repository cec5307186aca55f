use serde::{Deserialize, Serialize};

use crate::{SessionError, SessionResult};

const MAX_DISPLAY_NAME_CHARS: usize = 50;
const MAX_BIO_CHARS: usize = 500;

/// The user-editable part of an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

impl Profile {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            avatar_url: None,
            bio: None,
        }
    }
}

/// A single change to a [`Profile`].
///
/// On the wire: `{"field": "display_name", "value": "Sam"}`, or
/// `{"field": "clear_bio"}` for the value-less variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ProfileUpdate {
    DisplayName(String),
    AvatarUrl(String),
    Bio(String),
    ClearAvatar,
    ClearBio,
}

impl ProfileUpdate {
    /// Checks the update on its own, before it touches any state.
    pub fn validate(&self) -> SessionResult<()> {
        match self {
            Self::DisplayName(name) => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(SessionError::InvalidProfile("display name is blank".into()));
                }
                if name.chars().count() > MAX_DISPLAY_NAME_CHARS {
                    return Err(SessionError::InvalidProfile(format!(
                        "display name exceeds {MAX_DISPLAY_NAME_CHARS} characters"
                    )));
                }
            }
            Self::AvatarUrl(url) => {
                if !(url.starts_with("https://") || url.starts_with("http://")) {
                    return Err(SessionError::InvalidProfile(format!(
                        "avatar url must be http(s): {url}"
                    )));
                }
            }
            Self::Bio(bio) => {
                if bio.chars().count() > MAX_BIO_CHARS {
                    return Err(SessionError::InvalidProfile(format!(
                        "bio exceeds {MAX_BIO_CHARS} characters"
                    )));
                }
            }
            Self::ClearAvatar | Self::ClearBio => {}
        }
        Ok(())
    }
}

/// Holds the signed-in user's profile, if one has been loaded.
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    profile: Option<Profile>,
}

impl ProfileState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the profile with one fetched from the store.
    pub fn load(&mut self, profile: Profile) {
        self.profile = Some(profile);
    }

    pub fn clear(&mut self) {
        self.profile = None;
    }

    /// Applies one update. The profile is left unchanged when the update
    /// is rejected.
    pub fn apply(&mut self, update: ProfileUpdate) -> SessionResult<&Profile> {
        update.validate()?;
        let profile = self.profile.as_mut().ok_or(SessionError::NotSignedIn)?;
        match update {
            ProfileUpdate::DisplayName(name) => profile.display_name = name.trim().to_string(),
            ProfileUpdate::AvatarUrl(url) => profile.avatar_url = Some(url),
            ProfileUpdate::Bio(bio) => profile.bio = Some(bio),
            ProfileUpdate::ClearAvatar => profile.avatar_url = None,
            ProfileUpdate::ClearBio => profile.bio = None,
        }
        Ok(&*profile)
    }

    pub fn get(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn snapshot(&self) -> Option<Profile> {
        self.profile.clone()
    }
}

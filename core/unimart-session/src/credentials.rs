use serde::{Deserialize, Serialize};
use unimart_types::UserId;

/// Identity of the signed-in user, as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub user_id: UserId,
    pub email: String,
}

impl Credentials {
    pub fn new(user_id: impl Into<UserId>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
        }
    }
}

/// Holds the current credentials, if any.
#[derive(Debug, Clone, Default)]
pub struct CredentialsState {
    current: Option<Credentials>,
}

impl CredentialsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sign-in, returning the credentials it replaced.
    pub fn sign_in(&mut self, credentials: Credentials) -> Option<Credentials> {
        self.current.replace(credentials)
    }

    /// Forgets the current credentials, returning them.
    pub fn sign_out(&mut self) -> Option<Credentials> {
        self.current.take()
    }

    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.current.as_ref().map(|c| &c.user_id)
    }

    pub fn snapshot(&self) -> Option<Credentials> {
        self.current.clone()
    }
}

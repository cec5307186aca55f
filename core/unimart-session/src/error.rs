//! Error types for the session read model.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while updating session state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The operation needs a signed-in user.
    #[error("no user is signed in")]
    NotSignedIn,

    /// A profile update was rejected.
    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    /// The expiry given by the provider is not in the future.
    #[error("session expiry is in the past")]
    ExpiryInPast,
}

//! Session read model for Unimart.
//!
//! The authentication provider owns the actual sign-in protocol. This crate
//! only keeps what the app knows about the current session, split into
//! three independently owned pieces of state:
//! - [`CredentialsState`] — who is signed in
//! - [`ProfileState`] — the signed-in user's editable profile
//! - [`ExpiryState`] — when the provider's session lapses
//!
//! [`Session`] owns one of each and merges their snapshots into a single
//! immutable [`SessionSnapshot`] on every read. The pieces never hold
//! references to one another; cross-cutting updates such as signing out go
//! through the aggregator.

mod credentials;
mod error;
mod expiry;
mod profile;
mod session;

pub use credentials::{Credentials, CredentialsState};
pub use error::{SessionError, SessionResult};
pub use expiry::ExpiryState;
pub use profile::{Profile, ProfileState, ProfileUpdate};
pub use session::{Session, SessionSnapshot};

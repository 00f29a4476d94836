//! Authentication types and session state.
//!
//! All authenticated operations read their bearer token from a [`Session`]
//! that the caller owns and injects into the client.

mod credentials;
mod session;
mod tokens;

pub use credentials::Credentials;
pub use session::Session;
pub use tokens::{AccessToken, RefreshToken, TokenPair};

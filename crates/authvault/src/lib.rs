//! authvault - client for the AuthVault authentication API
//!
//! This library talks to a remote authentication service that owns all
//! credential checking, token issuance and persistence. Authenticated calls
//! go through an [`AuthClient`], which reads bearer tokens from a
//! caller-owned [`Session`] and transparently refreshes them once when the
//! server answers 401.
//!
//! # Example
//!
//! ```no_run
//! use authvault::{ApiUrl, AuthClient, Credentials, Session};
//!
//! # async fn example() -> Result<(), authvault::Error> {
//! let api = ApiUrl::new("http://localhost:5000/api/auth")?;
//! let session = Session::new();
//! let client = AuthClient::new(api, session.clone())?;
//!
//! client.login(Credentials::new("alice@example.com", "hunter2")).await?;
//!
//! let user = client.me().await?;
//! println!("{}", user["email"]);
//!
//! client.logout().await?;
//! assert!(!session.is_authenticated().await);
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod auth;
pub mod client;
pub mod error;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{AccessToken, Credentials, RefreshToken, Session, TokenPair};
pub use client::{ApiResponse, AuthClient};
pub use error::Error;
pub use reqwest::StatusCode;
pub use types::{ApiUrl, LoginAttempt};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

//! Auth API client.
//!
//! [`AuthClient`] owns the bearer-token interceptor (`authorized_get` and
//! `refresh`) plus typed wrappers for every Auth API endpoint.

mod auth_client;
mod endpoints;
mod operations;
mod response;

pub use auth_client::AuthClient;
pub use response::ApiResponse;

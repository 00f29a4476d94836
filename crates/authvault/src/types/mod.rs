//! Validated API types and response models.

mod api_url;
mod login_attempt;

pub use api_url::{ApiUrl, DEFAULT_API_URL};
pub use login_attempt::LoginAttempt;

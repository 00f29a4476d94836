//! Login attempt record reported by the admin endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single login attempt as recorded by the Auth API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginAttempt {
    /// Email the attempt was made for.
    pub email: String,
    /// Id of the matched user, if the email belonged to an account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Whether the attempt authenticated.
    pub success: bool,
    /// Time of the attempt.
    pub created_at: DateTime<Utc>,
}

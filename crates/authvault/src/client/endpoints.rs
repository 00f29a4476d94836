//! Auth API endpoint paths and request/response bodies.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

pub const SIGNUP: &str = "/signup";
pub const LOGIN: &str = "/login";
pub const REFRESH_TOKEN: &str = "/refresh-token";
pub const ME: &str = "/me";
pub const FORGOT_PASSWORD: &str = "/forgot-password";
pub const RESET_PASSWORD: &str = "/reset-password";
pub const LOGIN_ATTEMPTS: &str = "/admin/login-attempts";
pub const LOGOUT: &str = "/logout";
pub const LOGOUT_ALL: &str = "/logout-all";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Success envelope: every success body nests its payload under `data`.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Error body; `message` is absent on some failures.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body for both `/refresh-token` and `/logout`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ForgotPasswordRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest<'a> {
    pub email: &'a str,
    pub token: &'a str,
    pub new_password: &'a str,
}

/// `data` of a `/me` response.
#[derive(Debug, Deserialize)]
pub struct MeData {
    pub user: serde_json::Value,
}

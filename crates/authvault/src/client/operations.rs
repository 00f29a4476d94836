//! Typed Auth API operations built on [`AuthClient`].

use tracing::{debug, info, instrument, warn};

use crate::auth::{Credentials, TokenPair};
use crate::error::{AuthError, Error, InvalidInputError};
use crate::types::LoginAttempt;

use super::auth_client::AuthClient;
use super::endpoints::*;
use super::response::ApiResponse;

impl AuthClient {
    /// Authenticate and store the issued token pair in the session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] with the server's message on any non-200
    /// response (bad credentials, locked account).
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn login(&self, credentials: Credentials) -> Result<(), Error> {
        credentials.validate()?;
        info!("Logging in");

        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };
        let response = self.post_json(LOGIN, &request).await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(response.to_api_error().into());
        }

        let tokens: TokenPair = response.data()?;
        self.session.set_tokens(tokens).await;
        debug!("Login successful");
        Ok(())
    }

    /// Register a new account and store the issued token pair.
    #[instrument(skip(self, credentials), fields(email = %credentials.email()))]
    pub async fn signup(&self, name: &str, credentials: Credentials) -> Result<(), Error> {
        credentials.validate()?;
        if name.trim().is_empty() {
            return Err(InvalidInputError::Empty { field: "name" }.into());
        }
        info!("Creating account");

        let request = SignupRequest {
            name,
            email: credentials.email(),
            password: credentials.password(),
        };
        let response = self.post_json(SIGNUP, &request).await?;

        if !response.is_success() {
            return Err(response.to_api_error().into());
        }

        let tokens: TokenPair = response.data()?;
        self.session.set_tokens(tokens).await;
        Ok(())
    }

    /// Fetch the logged-in user's profile.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<serde_json::Value, Error> {
        self.require_login().await?;
        let response = self.authorized_get(ME).await?;
        let data: MeData = Self::authorized_data(&response)?;
        Ok(data.user)
    }

    /// Request a password-reset email.
    ///
    /// The response is deliberately ignored so the caller cannot learn
    /// whether the email belongs to an account.
    #[instrument(skip(self))]
    pub async fn forgot_password(&self, email: &str) -> Result<(), Error> {
        if email.trim().is_empty() {
            return Err(InvalidInputError::Empty { field: "email" }.into());
        }

        let response = self
            .post_json(FORGOT_PASSWORD, &ForgotPasswordRequest { email })
            .await?;
        debug!(status = %response.status(), "Forgot-password acknowledged");
        Ok(())
    }

    /// Set a new password using an emailed reset token.
    #[instrument(skip(self, token, new_password))]
    pub async fn reset_password(
        &self,
        email: &str,
        token: &str,
        new_password: &str,
    ) -> Result<(), Error> {
        if email.trim().is_empty() {
            return Err(InvalidInputError::Empty { field: "email" }.into());
        }
        if token.trim().is_empty() {
            return Err(InvalidInputError::Empty { field: "token" }.into());
        }
        if new_password.is_empty() {
            return Err(InvalidInputError::Empty {
                field: "new password",
            }
            .into());
        }

        let request = ResetPasswordRequest {
            email,
            token,
            new_password,
        };
        let response = self.post_json(RESET_PASSWORD, &request).await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(response.to_api_error().into());
        }
        info!("Password reset");
        Ok(())
    }

    /// Fetch the login attempt log (admin only).
    #[instrument(skip(self))]
    pub async fn login_attempts(&self) -> Result<Vec<LoginAttempt>, Error> {
        self.require_login().await?;
        let response = self.authorized_get(LOGIN_ATTEMPTS).await?;
        Self::authorized_data(&response)
    }

    /// Log out of this session.
    ///
    /// The refresh token is revoked server-side on a best-effort basis; the
    /// local session is cleared whatever the outcome.
    #[instrument(skip(self))]
    pub async fn logout(&self) -> Result<(), Error> {
        if let Some(refresh_token) = self.session.refresh_token().await {
            let request = RefreshTokenRequest {
                refresh_token: refresh_token.as_str(),
            };
            match self.post_json(LOGOUT, &request).await {
                Ok(response) if !response.is_success() => {
                    warn!(status = %response.status(), "Server did not acknowledge logout");
                }
                Ok(_) => {}
                Err(e) => warn!(error = %e, "Failed to revoke refresh token"),
            }
        }

        self.session.clear().await;
        info!("Logged out");
        Ok(())
    }

    /// Revoke every session of the current user.
    ///
    /// The local session is cleared even if the request fails; transport
    /// failures are still reported.
    #[instrument(skip(self))]
    pub async fn logout_all(&self) -> Result<(), Error> {
        let mut request = self.http.post(self.api.endpoint(LOGOUT_ALL));
        if let Some(token) = self.session.access_token().await {
            request = request.bearer_auth(token.as_str());
        }

        let result = match request.send().await {
            Ok(response) => ApiResponse::read(response).await,
            Err(e) => Err(e.into()),
        };
        self.session.clear().await;

        let response = result?;
        if !response.is_success() {
            warn!(status = %response.status(), "Server did not acknowledge logout-all");
        }
        info!("Logged out of all sessions");
        Ok(())
    }

    async fn post_json<B>(&self, path: &str, body: &B) -> Result<ApiResponse, Error>
    where
        B: serde::Serialize,
    {
        debug!(path, "POST");
        let response = self
            .http
            .post(self.api.endpoint(path))
            .json(body)
            .send()
            .await?;
        ApiResponse::read(response).await
    }

    async fn require_login(&self) -> Result<(), Error> {
        if self.session.access_token().await.is_none() {
            return Err(AuthError::NotLoggedIn.into());
        }
        Ok(())
    }

    /// Map the outcome of an authorized request onto the typed error space.
    fn authorized_data<T: serde::de::DeserializeOwned>(
        response: &ApiResponse,
    ) -> Result<T, Error> {
        if response.is_unauthorized() {
            return Err(AuthError::SessionExpired.into());
        }
        if !response.is_success() {
            return Err(response.to_api_error().into());
        }
        response.data()
    }
}

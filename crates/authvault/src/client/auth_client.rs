//! Bearer-authenticated HTTP client with transparent token refresh.

use reqwest::StatusCode;
use tracing::{debug, info, instrument, warn};

use crate::auth::{AccessToken, Session, TokenPair};
use crate::error::Error;
use crate::types::ApiUrl;

use super::endpoints::{REFRESH_TOKEN, RefreshTokenRequest};
use super::response::ApiResponse;

/// HTTP client for the Auth API.
///
/// Every authorized request carries `Authorization: Bearer <access token>`
/// taken from the injected [`Session`]. A 401 triggers at most one refresh
/// and at most one retry of the same request, so a misconfigured server
/// can never cause a refresh loop.
///
/// The client is cheap to clone; clones share the HTTP connection pool and
/// the session.
///
/// # Example
///
/// ```no_run
/// use authvault::{ApiUrl, AuthClient, Credentials, Session};
///
/// # async fn example() -> Result<(), authvault::Error> {
/// let session = Session::new();
/// let client = AuthClient::new(ApiUrl::default(), session.clone())?;
///
/// client.login(Credentials::new("alice@example.com", "hunter2")).await?;
/// let response = client.authorized_get("/me").await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AuthClient {
    pub(super) http: reqwest::Client,
    pub(super) api: ApiUrl,
    pub(super) session: Session,
}

impl AuthClient {
    /// Create a client for the given API with a caller-owned session.
    pub fn new(api: ApiUrl, session: Session) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("authvault/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_http_client(http, api, session))
    }

    /// Create a client reusing an existing `reqwest` client.
    pub fn with_http_client(http: reqwest::Client, api: ApiUrl, session: Session) -> Self {
        Self { http, api, session }
    }

    /// Exchange the held refresh token for a new token pair.
    ///
    /// Returns `Ok(false)` without any network call when no refresh token is
    /// held. If the server rejects the refresh, the session is cleared and
    /// `Ok(false)` is returned; the rejection is never retried.
    ///
    /// # Errors
    ///
    /// Only transport failures are errors; they leave the session untouched.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn refresh(&self) -> Result<bool, Error> {
        let _guard = self.session.lock_refresh().await;
        self.refresh_locked().await
    }

    /// GET `target` with the session's bearer token.
    ///
    /// `target` is an endpoint path (`"/me"`) or an absolute URL under the
    /// API base; any other absolute URL is refused with
    /// [`InvalidInputError::Endpoint`](crate::error::InvalidInputError::Endpoint)
    /// before anything is sent. On a 401 the
    /// session is refreshed once; if that succeeds the request is resent with
    /// the new access token and the second response is returned whatever its
    /// status. If the refresh fails the original 401 is returned. Any other
    /// response is returned unchanged.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn authorized_get(&self, target: &str) -> Result<ApiResponse, Error> {
        let url = self.api.resolve(target)?;

        let (generation, sent_with) = self.session.snapshot().await;
        let response = self.send_get(&url, sent_with.as_ref()).await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        debug!("Access token rejected, attempting refresh");
        match self.refresh_after_rejection(generation).await? {
            Some(token) => {
                debug!("Retrying request with refreshed token");
                self.send_get(&url, Some(&token)).await
            }
            None => Ok(response),
        }
    }

    /// Refresh on behalf of a request sent at session `generation`.
    ///
    /// Returns the access token to retry with, or `None` if the session
    /// could not be refreshed. If another caller already wrote the session
    /// while this one waited for the lock, its outcome is reused instead of
    /// spending the (now revoked) refresh token again.
    async fn refresh_after_rejection(
        &self,
        generation: u64,
    ) -> Result<Option<AccessToken>, Error> {
        let _guard = self.session.lock_refresh().await;

        let (current_generation, current) = self.session.snapshot().await;
        if current_generation != generation {
            debug!("Session changed while waiting for refresh, reusing its outcome");
            return Ok(current);
        }

        if self.refresh_locked().await? {
            Ok(self.session.access_token().await)
        } else {
            Ok(None)
        }
    }

    /// The refresh itself; callers hold the session's refresh lock.
    async fn refresh_locked(&self) -> Result<bool, Error> {
        let Some(refresh_token) = self.session.refresh_token().await else {
            debug!("No refresh token held, skipping refresh");
            return Ok(false);
        };

        info!("Refreshing session");

        let request = RefreshTokenRequest {
            refresh_token: refresh_token.as_str(),
        };
        let response = self
            .http
            .post(self.api.endpoint(REFRESH_TOKEN))
            .json(&request)
            .send()
            .await?;
        let response = ApiResponse::read(response).await?;

        if response.status() == StatusCode::OK {
            match response.data::<TokenPair>() {
                Ok(tokens) => {
                    self.session.set_tokens(tokens).await;
                    debug!("Session refreshed successfully");
                    return Ok(true);
                }
                Err(e) => warn!(error = %e, "Refresh response carried no token pair"),
            }
        } else {
            warn!(status = %response.status(), "Refresh rejected");
        }

        self.session.clear().await;
        warn!("Session cleared after failed refresh");
        Ok(false)
    }

    async fn send_get(
        &self,
        url: &str,
        token: Option<&AccessToken>,
    ) -> Result<ApiResponse, Error> {
        let mut request = self.http.get(url);
        if let Some(token) = token {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await?;
        ApiResponse::read(response).await
    }
}

//! Buffered API responses.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::{ApiError, Error};

use super::endpoints::{DataEnvelope, ErrorBody};

/// A fully-read HTTP response from the Auth API.
///
/// Returned unmodified by [`AuthClient::authorized_get`](crate::AuthClient::authorized_get):
/// the status and body are exactly what the server sent for the request
/// that was returned (the original or the single retry).
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    body: Vec<u8>,
}

impl ApiResponse {
    /// Create a response from its parts.
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, Error> {
        let status = response.status();
        let body = response.bytes().await?.to_vec();
        trace!(%status, len = body.len(), "API response");
        Ok(Self { status, body })
    }

    /// Returns the HTTP status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns true for any 2xx status.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns true if the server rejected the bearer token.
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }

    /// Decode the whole body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Decode the `data` field of a `{"data": ...}` body.
    pub fn data<T: DeserializeOwned>(&self) -> Result<T, Error> {
        let envelope: DataEnvelope<T> = self.json()?;
        Ok(envelope.data)
    }

    /// Returns the `message` field of an error body, if there is one.
    pub fn message(&self) -> Option<String> {
        serde_json::from_slice::<ErrorBody>(&self.body)
            .ok()
            .and_then(|b| b.message)
    }

    /// Convert into an [`ApiError`] carrying the status and server message.
    pub fn to_api_error(&self) -> ApiError {
        ApiError::new(self.status.as_u16(), self.message())
    }
}

//! Auth API base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// Base URL of a local development Auth API.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/auth";

/// A validated Auth API base URL.
///
/// The URL must be absolute and use HTTPS (or HTTP for localhost). Endpoint
/// paths are appended to it, so a trailing slash is dropped.
///
/// # Example
///
/// ```
/// use authvault::ApiUrl;
///
/// let api = ApiUrl::new("https://auth.example.com/api/auth/").unwrap();
/// assert_eq!(api.endpoint("/me"), "https://auth.example.com/api/auth/me");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        let mut normalized = url;
        let trimmed = normalized.path().trim_end_matches('/').to_string();
        normalized.set_path(&trimmed);
        normalized.set_query(None);
        normalized.set_fragment(None);

        Ok(Self(normalized))
    }

    /// Returns the full URL of an endpoint path such as `/me`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Resolve a request target into a URL under this base.
    ///
    /// Anything that is not an absolute URL is treated as an endpoint path.
    /// An absolute URL is accepted only if it shares this base's scheme, host
    /// and port and its path lies under the base path, so the session's
    /// bearer token is never sent to another server.
    pub fn resolve(&self, target: &str) -> Result<String, Error> {
        let url = match Url::parse(target) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => return Ok(self.endpoint(target)),
            Err(e) => {
                return Err(InvalidInputError::Endpoint {
                    value: target.to_string(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        if !matches!(url.scheme(), "http" | "https") {
            return Err(InvalidInputError::Endpoint {
                value: target.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }

        if !self.contains(&url) {
            return Err(InvalidInputError::Endpoint {
                value: target.to_string(),
                reason: format!("outside the API base URL {}", self.0),
            }
            .into());
        }

        Ok(url.into())
    }

    fn contains(&self, url: &Url) -> bool {
        let base = &self.0;
        if url.scheme() != base.scheme()
            || url.host_str() != base.host_str()
            || url.port_or_known_default() != base.port_or_known_default()
        {
            return false;
        }

        let prefix = base.path().trim_end_matches('/');
        prefix.is_empty()
            || url.path() == prefix
            || url
                .path()
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_API_URL).expect("default API URL is valid"))
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let api = ApiUrl::new("https://auth.example.com/api/auth").unwrap();
        assert_eq!(api.as_str(), "https://auth.example.com/api/auth");
    }

    #[test]
    fn valid_localhost_http() {
        let api = ApiUrl::new("http://localhost:5000/api/auth").unwrap();
        assert_eq!(api.endpoint("/me"), "http://localhost:5000/api/auth/me");
    }

    #[test]
    fn default_points_at_local_api() {
        assert_eq!(
            ApiUrl::default().endpoint("/login"),
            "http://localhost:5000/api/auth/login"
        );
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let api = ApiUrl::new("https://auth.example.com/api/auth/").unwrap();
        assert_eq!(
            api.endpoint("refresh-token"),
            "https://auth.example.com/api/auth/refresh-token"
        );
    }

    #[test]
    fn root_base_url() {
        let api = ApiUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(api.endpoint("/me"), "http://127.0.0.1:8080/me");
    }

    #[test]
    fn resolve_keeps_absolute_urls_under_base() {
        let api = ApiUrl::default();
        assert_eq!(
            api.resolve("http://localhost:5000/api/auth/me?verbose=1").unwrap(),
            "http://localhost:5000/api/auth/me?verbose=1"
        );
        assert_eq!(
            api.resolve("/admin/login-attempts").unwrap(),
            "http://localhost:5000/api/auth/admin/login-attempts"
        );
    }

    #[test]
    fn resolve_rejects_foreign_absolute_urls() {
        let api = ApiUrl::default();
        for target in [
            "https://other.example.com/x",
            "http://other.example.com:5000/api/auth/me",
            "https://localhost:5000/api/auth/me",
            "http://localhost:5001/api/auth/me",
            "http://localhost:5000/api/authz/me",
            "http://localhost:5000/other",
        ] {
            let err = api.resolve(target).unwrap_err();
            assert!(
                matches!(err, Error::InvalidInput(InvalidInputError::Endpoint { .. })),
                "{target} was accepted"
            );
        }
    }

    #[test]
    fn resolve_with_root_base_accepts_any_path_on_host() {
        let api = ApiUrl::new("https://auth.example.com").unwrap();
        assert_eq!(
            api.resolve("https://auth.example.com:443/reports/1").unwrap(),
            "https://auth.example.com/reports/1"
        );
        assert!(api.resolve("https://evil.example.com/reports/1").is_err());
    }

    #[test]
    fn resolve_rejects_other_schemes() {
        assert!(ApiUrl::default().resolve("ftp://example.com/me").is_err());
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://auth.example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/api/auth").is_err());
    }
}

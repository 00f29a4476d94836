//! Session state shared between a caller and its [`AuthClient`].
//!
//! [`AuthClient`]: crate::AuthClient

use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, RwLock};
use tracing::info;

use super::tokens::{AccessToken, RefreshToken, TokenPair};

/// Holder of the current access/refresh token pair for one user.
///
/// A session is either authenticated (both tokens held) or logged out
/// (neither held); the token pair is stored as a unit so a half-applied
/// state cannot exist.
///
/// Sessions are cheap to clone (they use internal `Arc`). Clones observe
/// the same tokens, which lets the owner of a session inspect or persist
/// the tokens an [`AuthClient`](crate::AuthClient) has rotated.
///
/// # Example
///
/// ```
/// use authvault::{Session, TokenPair};
///
/// # async fn example() {
/// let session = Session::from_tokens(TokenPair::new("access", "refresh"));
/// assert!(session.is_authenticated().await);
///
/// session.clear().await;
/// assert!(session.access_token().await.is_none());
/// # }
/// ```
#[derive(Clone, Default)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Default)]
struct SessionInner {
    state: RwLock<TokenState>,
    refresh_lock: Mutex<()>,
}

/// The token pair plus a counter bumped on every write, so a waiter can tell
/// whether the session changed even when a refresh reissued the same access
/// token.
#[derive(Default)]
struct TokenState {
    pair: Option<TokenPair>,
    generation: u64,
}

impl Session {
    /// Create an empty (logged out) session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from persisted tokens.
    ///
    /// The caller is responsible for the tokens being current; a stale pair
    /// is repaired by the first refresh.
    pub fn from_tokens(tokens: TokenPair) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                state: RwLock::new(TokenState {
                    pair: Some(tokens),
                    generation: 0,
                }),
                refresh_lock: Mutex::new(()),
            }),
        }
    }

    /// Returns a snapshot of the current token pair.
    pub async fn tokens(&self) -> Option<TokenPair> {
        self.inner.state.read().await.pair.clone()
    }

    /// Returns the current access token, if logged in.
    pub async fn access_token(&self) -> Option<AccessToken> {
        let state = self.inner.state.read().await;
        state.pair.as_ref().map(|t| t.access_token.clone())
    }

    /// Returns the current refresh token, if logged in.
    pub async fn refresh_token(&self) -> Option<RefreshToken> {
        let state = self.inner.state.read().await;
        state.pair.as_ref().map(|t| t.refresh_token.clone())
    }

    /// Returns true if the session holds a token pair.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.state.read().await.pair.is_some()
    }

    /// Replace both tokens with a newly issued pair.
    pub async fn set_tokens(&self, tokens: TokenPair) {
        let mut state = self.inner.state.write().await;
        state.pair = Some(tokens);
        state.generation += 1;
        drop(state);
        info!("Session tokens updated");
    }

    /// Drop both tokens.
    pub async fn clear(&self) {
        let mut state = self.inner.state.write().await;
        let previous = state.pair.take();
        state.generation += 1;
        drop(state);
        if previous.is_some() {
            info!("Session cleared");
        }
    }

    /// Returns the write generation together with the access token it holds.
    pub(crate) async fn snapshot(&self) -> (u64, Option<AccessToken>) {
        let state = self.inner.state.read().await;
        let token = state.pair.as_ref().map(|t| t.access_token.clone());
        (state.generation, token)
    }

    /// Serializes refreshes of this session.
    pub(crate) async fn lock_refresh(&self) -> MutexGuard<'_, ()> {
        self.inner.refresh_lock.lock().await
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let authenticated = self.inner.state.try_read().map(|s| s.pair.is_some()).ok();
        f.debug_struct("Session")
            .field("authenticated", &authenticated)
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_session_is_logged_out() {
        let session = Session::new();
        assert!(!session.is_authenticated().await);
        assert!(session.access_token().await.is_none());
        assert!(session.refresh_token().await.is_none());
    }

    #[tokio::test]
    async fn set_tokens_replaces_both() {
        let session = Session::from_tokens(TokenPair::new("a1", "r1"));
        session.set_tokens(TokenPair::new("a2", "r2")).await;

        assert_eq!(session.access_token().await.unwrap().as_str(), "a2");
        assert_eq!(session.refresh_token().await.unwrap().as_str(), "r2");
    }

    #[tokio::test]
    async fn clones_share_tokens() {
        let session = Session::new();
        let view = session.clone();

        session.set_tokens(TokenPair::new("a1", "r1")).await;
        assert!(view.is_authenticated().await);

        view.clear().await;
        assert!(session.tokens().await.is_none());
    }

    #[tokio::test]
    async fn every_write_bumps_generation() {
        let session = Session::from_tokens(TokenPair::new("a1", "r1"));
        let (start, token) = session.snapshot().await;
        assert_eq!(token.unwrap().as_str(), "a1");

        // Same access token reissued: still a new generation.
        session.set_tokens(TokenPair::new("a1", "r2")).await;
        let (after_set, token) = session.snapshot().await;
        assert!(after_set > start);
        assert_eq!(token.unwrap().as_str(), "a1");

        session.clear().await;
        let (after_clear, token) = session.snapshot().await;
        assert!(after_clear > after_set);
        assert!(token.is_none());
    }

    #[tokio::test]
    async fn debug_hides_tokens() {
        let session = Session::from_tokens(TokenPair::new("secret-access", "secret-refresh"));
        let debug = format!("{:?}", session);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}

//! CLI session wrapper.

pub mod storage;

use anyhow::{Context, Result};

use authvault::{ApiUrl, AuthClient, Session};

/// A persisted session plus the client that reads and rotates it.
///
/// Commands load it at start and call [`CliSession::save`] before reporting
/// their outcome, so rotated or cleared tokens reach disk even when the
/// command itself fails.
#[derive(Debug)]
pub struct CliSession {
    api: ApiUrl,
    session: Session,
    client: AuthClient,
}

impl CliSession {
    pub async fn load(api: ApiUrl) -> Result<Self> {
        let session = storage::load_session(&api)
            .await
            .context("Failed to load session")?;
        let client =
            AuthClient::new(api.clone(), session.clone()).context("Failed to build HTTP client")?;

        Ok(Self {
            api,
            session,
            client,
        })
    }

    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    pub fn client(&self) -> &AuthClient {
        &self.client
    }

    pub async fn is_authenticated(&self) -> bool {
        self.session.is_authenticated().await
    }

    pub async fn save(&self) -> Result<()> {
        storage::save_session(&self.api, &self.session)
            .await
            .context("Failed to save session")
    }
}

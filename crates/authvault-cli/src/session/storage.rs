//! Session storage for persisting login state between invocations.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use authvault::{ApiUrl, Session, TokenPair};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    api: String,
    access_token: String,
    refresh_token: String,
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "authvault").context("Could not determine data directory")?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Save a session to disk, or remove the file if the session is logged out.
pub async fn save_session(api: &ApiUrl, session: &Session) -> Result<()> {
    let path = session_path()?;

    let Some(tokens) = session.tokens().await else {
        if path.exists() {
            fs::remove_file(&path).context("Failed to remove session file")?;
            debug!(path = %path.display(), "Removed session file");
        }
        return Ok(());
    };

    let stored = StoredSession {
        api: api.to_string(),
        access_token: tokens.access_token.as_str().to_string(),
        refresh_token: tokens.refresh_token.as_str().to_string(),
    };
    let json = serde_json::to_string_pretty(&stored)?;

    fs::write(&path, &json).context("Failed to write session file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    debug!(path = %path.display(), "Saved session");
    Ok(())
}

/// Load the stored session for `api`.
///
/// Returns an empty session if nothing is stored or the stored tokens were
/// issued by a different API.
pub async fn load_session(api: &ApiUrl) -> Result<Session> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(Session::new());
    }

    let json = fs::read_to_string(&path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;

    let stored_api = ApiUrl::new(&stored.api).context("Invalid API URL in session")?;
    if &stored_api != api {
        warn!(
            stored = %stored_api,
            requested = %api,
            "Stored session belongs to another API, ignoring it"
        );
        return Ok(Session::new());
    }

    Ok(Session::from_tokens(TokenPair::new(
        stored.access_token,
        stored.refresh_token,
    )))
}

//! Refresh token command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;
use colored::Colorize;

use authvault::ApiUrl;

use crate::output;
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct RefreshTokenArgs {}

pub async fn run(_args: RefreshTokenArgs, api: ApiUrl) -> Result<()> {
    let session = CliSession::load(api).await?;

    if !session.is_authenticated().await {
        bail!("No active session. Run 'authvault login' first.");
    }

    eprintln!("{}", "Refreshing session...".dimmed());

    let refreshed = session
        .client()
        .refresh()
        .await
        .context("Failed to refresh session")?;

    // Save the rotated tokens, or drop the rejected ones
    session.save().await?;

    if !refreshed {
        output::error("Refresh token rejected; you have been logged out");
        bail!("Session expired. Run 'authvault login' again.");
    }

    output::success("Session refreshed successfully");
    Ok(())
}

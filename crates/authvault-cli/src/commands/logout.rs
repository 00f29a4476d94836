//! Logout command implementation.

use anyhow::{Context, Result};
use clap::Args;

use authvault::ApiUrl;

use crate::output;
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct LogoutArgs {
    /// Revoke every session of this account, not just this one
    #[arg(long)]
    pub all: bool,
}

pub async fn run(args: LogoutArgs, api: ApiUrl) -> Result<()> {
    let session = CliSession::load(api).await?;

    if args.all {
        let result = session.client().logout_all().await;
        session.save().await?;
        result.context("Failed to log out of all sessions")?;
        output::success("Logged out from all sessions");
    } else {
        let result = session.client().logout().await;
        session.save().await?;
        result.context("Failed to log out")?;
        output::success("Logged out successfully");
    }

    Ok(())
}

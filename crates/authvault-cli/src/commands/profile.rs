//! Profile command implementation.

use anyhow::{Context, Result};
use clap::Args;

use authvault::ApiUrl;

use crate::output;
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct ProfileArgs {}

pub async fn run(_args: ProfileArgs, api: ApiUrl) -> Result<()> {
    let session = CliSession::load(api).await?;

    if !session.is_authenticated().await {
        output::warning("Please login first");
        return Ok(());
    }

    let result = session.client().me().await;
    session.save().await?;

    let user = result.context("Failed to load profile")?;
    output::json_pretty(&user)
}

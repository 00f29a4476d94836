//! Forgot-password command implementation.

use anyhow::{Context, Result};
use clap::Args;

use authvault::ApiUrl;

use crate::output;
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct ForgotPasswordArgs {
    /// Account email
    #[arg(long)]
    pub email: String,
}

pub async fn run(args: ForgotPasswordArgs, api: ApiUrl) -> Result<()> {
    let session = CliSession::load(api).await?;

    session
        .client()
        .forgot_password(&args.email)
        .await
        .context("Failed to request password reset")?;

    output::success("If this email exists, a reset link has been sent.");
    Ok(())
}

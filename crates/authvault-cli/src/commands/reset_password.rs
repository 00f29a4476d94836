//! Reset-password command implementation.

use anyhow::{Context, Result};
use clap::Args;

use authvault::ApiUrl;

use crate::output;
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct ResetPasswordArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Reset token from the password reset email
    #[arg(long)]
    pub token: String,

    /// New password
    #[arg(long)]
    pub new_password: String,
}

pub async fn run(args: ResetPasswordArgs, api: ApiUrl) -> Result<()> {
    let session = CliSession::load(api).await?;

    session
        .client()
        .reset_password(&args.email, &args.token, &args.new_password)
        .await
        .context("Failed to reset password")?;

    output::success("Password reset successful");
    Ok(())
}

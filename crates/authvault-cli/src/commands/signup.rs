//! Signup command implementation.

use anyhow::{Context, Result};
use clap::Args;

use authvault::{ApiUrl, Credentials};

use crate::output;
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Account email
    #[arg(long)]
    pub email: String,

    /// Password (at least 8 characters with an uppercase letter and a digit)
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: SignupArgs, api: ApiUrl) -> Result<()> {
    let session = CliSession::load(api).await?;

    session
        .client()
        .signup(&args.name, Credentials::new(&args.email, &args.password))
        .await
        .context("Failed to create account")?;

    session.save().await?;

    output::success("Account created");
    output::field("Email", &args.email);

    Ok(())
}

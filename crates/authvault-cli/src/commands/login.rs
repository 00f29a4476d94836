//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use authvault::{ApiUrl, Credentials};

use crate::output;
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, api: ApiUrl) -> Result<()> {
    let session = CliSession::load(api).await?;
    let credentials = Credentials::new(&args.email, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    session
        .client()
        .login(credentials)
        .await
        .context("Failed to login")?;

    session.save().await?;

    output::success("Login successful");
    println!();
    output::field("Email", &args.email);
    output::field("API", session.api().as_str());

    Ok(())
}

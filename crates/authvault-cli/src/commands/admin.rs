//! Admin analytics command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;

use authvault::analytics::{DailyAttempts, daily_summary};
use authvault::{ApiUrl, LoginAttempt};

use crate::output;
use crate::session::CliSession;

#[derive(Args, Debug)]
pub struct AdminArgs {
    /// Print attempts and daily totals as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    attempts: &'a [LoginAttempt],
    daily: Vec<DailyAttempts>,
}

pub async fn run(args: AdminArgs, api: ApiUrl) -> Result<()> {
    let session = CliSession::load(api).await?;

    if !session.is_authenticated().await {
        output::warning("Admin login required");
        return Ok(());
    }

    let result = session.client().login_attempts().await;
    session.save().await?;

    let attempts = result.context("Failed to load login attempts")?;
    let daily = daily_summary(&attempts);

    if args.json {
        return output::json_pretty(&Report {
            attempts: &attempts,
            daily,
        });
    }

    println!("{}", "Login attempts".bold());
    for attempt in &attempts {
        let outcome = if attempt.success {
            "ok".green()
        } else {
            "failed".red()
        };
        println!(
            "{}  {:<6}  {}  {}",
            attempt.created_at.format("%Y-%m-%d %H:%M:%S"),
            outcome,
            attempt.email,
            attempt.ip.as_deref().unwrap_or("-").dimmed()
        );
    }

    println!();
    println!("{}", "Attempts per day".bold());
    for day in &daily {
        output::field(
            &day.date.to_string(),
            &format!(
                "{} total, {} succeeded, {} failed",
                day.total, day.succeeded, day.failed
            ),
        );
    }

    Ok(())
}

//! CLI argument definitions.

use authvault::ApiUrl;
use authvault::types::DEFAULT_API_URL;
use clap::Parser;

use crate::commands::Command;

/// AuthVault security portal on the command line.
#[derive(Parser, Debug)]
#[command(name = "authvault")]
#[command(author, version = env!("AUTHVAULT_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Auth API base URL
    #[arg(long, global = true, env = "AUTHVAULT_API", default_value = DEFAULT_API_URL)]
    pub api: ApiUrl,

    #[command(subcommand)]
    pub command: Command,
}

//! Subcommand implementations, one per portal view.

mod admin;
mod forgot_password;
mod login;
mod logout;
mod profile;
mod refresh_token;
mod reset_password;
mod signup;

use anyhow::Result;
use clap::Subcommand;

use authvault::ApiUrl;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the session
    Login(login::LoginArgs),

    /// Create an account and store the session
    Signup(signup::SignupArgs),

    /// Show the logged-in user's profile
    Profile(profile::ProfileArgs),

    /// Request a password reset email
    ForgotPassword(forgot_password::ForgotPasswordArgs),

    /// Set a new password with a reset token
    ResetPassword(reset_password::ResetPasswordArgs),

    /// Show login attempt analytics (admin only)
    Admin(admin::AdminArgs),

    /// Refresh the session tokens
    RefreshToken(refresh_token::RefreshTokenArgs),

    /// Log out of this session or all sessions
    Logout(logout::LogoutArgs),
}

pub async fn handle(cmd: Command, api: ApiUrl) -> Result<()> {
    match cmd {
        Command::Login(args) => login::run(args, api).await,
        Command::Signup(args) => signup::run(args, api).await,
        Command::Profile(args) => profile::run(args, api).await,
        Command::ForgotPassword(args) => forgot_password::run(args, api).await,
        Command::ResetPassword(args) => reset_password::run(args, api).await,
        Command::Admin(args) => admin::run(args, api).await,
        Command::RefreshToken(args) => refresh_token::run(args, api).await,
        Command::Logout(args) => logout::run(args, api).await,
    }
}

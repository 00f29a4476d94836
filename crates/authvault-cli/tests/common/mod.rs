#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{Value, json};

/// Run the CLI with a custom HOME directory for isolated session storage.
pub fn run_cli_with_env(args: &[&str], home: &Path, api_url: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_authvault"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_DATA_HOME", home.join("data"));
    cmd.env("AUTHVAULT_API", api_url);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI off the async runtime so a mock server can keep serving.
pub async fn run_cli(args: &[&str], home: &Path, api_url: &str) -> Output {
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
    let home = home.to_path_buf();
    let api_url = api_url.to_string();

    tokio::task::spawn_blocking(move || {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        run_cli_with_env(&args, &home, &api_url)
    })
    .await
    .expect("CLI task panicked")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

pub fn session_file(home: &Path) -> PathBuf {
    home.join("data").join("authvault").join("session.json")
}

/// Write a stored session as a previous login would have.
pub fn write_session(home: &Path, api_url: &str, access: &str, refresh: &str) {
    let path = session_file(home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let stored = json!({
        "api": api_url,
        "access_token": access,
        "refresh_token": refresh,
    });
    fs::write(path, serde_json::to_string_pretty(&stored).unwrap()).unwrap();
}

pub fn read_session(home: &Path) -> Option<Value> {
    let json = fs::read_to_string(session_file(home)).ok()?;
    Some(serde_json::from_str(&json).unwrap())
}

//! Provides functionality for interfacing with Git.
//!
//! This covers the ambient identity lookup for the `author`/`email`
//! template variables, and the subprocess invocations used by the remote
//! publisher.

use std::io;
use std::path::Path;
use std::process::{Command, Output};

/// An inline credential helper reading the child process environment, so
/// that the username and password never appear in a remote URL or in argv.
const CREDENTIAL_HELPER: &str =
    "credential.helper=!f() { echo \"username=${GIT_USERNAME}\"; echo \"password=${GIT_PASSWORD}\"; }; f";

/// Gets the user's name from Git.
pub fn user_name() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "user.name"])
        .output()
        .ok()?;

    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        None
    }
}

/// Gets the user's email from Git.
pub fn user_email() -> Option<String> {
    let output = Command::new("git")
        .args(["config", "--get", "user.email"])
        .output()
        .ok()?;

    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        None
    }
}

/// Runs `git` with the given arguments in the given directory, capturing
/// its output.
pub fn run(dir: &Path, args: &[&str]) -> io::Result<Output> {
    Command::new("git").args(args).current_dir(dir).output()
}

/// Pushes the initial branch upstream.
///
/// Authentication goes through [`CREDENTIAL_HELPER`]: the credentials are
/// passed in the child's environment and never interpolated into the
/// command line.
pub fn push(dir: &Path, username: &str, password: &str) -> io::Result<Output> {
    Command::new("git")
        .args(["-c", CREDENTIAL_HELPER, "push", "-u", "origin", "master"])
        .env("GIT_USERNAME", username)
        .env("GIT_PASSWORD", password)
        .env("GIT_TERMINAL_PROMPT", "0")
        .current_dir(dir)
        .output()
}

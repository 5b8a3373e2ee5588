//! Provides the remote publisher: creates a GitHub repository named after
//! the project slug, then initialises, commits and pushes the generated
//! project.

use crate::git;
use crate::prompt::Credentials;

use sitekit_core::ProjectConfig;

use reqwest::header::USER_AGENT;
use serde_derive::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};
use std::path::Path;

const API_ENDPOINT: &str = "https://api.github.com/user/repos";
const COMMIT_MESSAGE: &str = "Initial commit from sitekit";

/// A step of the publishing sequence, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    CreateRemote,
    Init,
    RemoteAdd,
    Stage,
    Commit,
    Push,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Step::CreateRemote => "creating the remote repository",
            Step::Init => "initialising the local repository",
            Step::RemoteAdd => "registering the remote",
            Step::Stage => "staging the initial commit",
            Step::Commit => "committing",
            Step::Push => "pushing upstream",
        })
    }
}

/// A failure of one publishing step.
///
/// The chain aborts at the failing step; earlier steps (the created remote,
/// local commits) are not rolled back.
#[derive(Debug)]
pub struct PublishError {
    pub step: Step,
    pub detail: String,
}

#[derive(Serialize)]
struct CreateRepoRequest<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
}

/// Runs the publishing sequence, strictly in order, each step gated on the
/// success of the previous one.
pub fn publish(
    config: &ProjectConfig,
    credentials: &Credentials,
    dir: &Path,
) -> Result<(), PublishError> {
    log!("Publishing", "creating remote repository `{}`", config.slug);
    create_remote(&config.slug, credentials)?;

    let remote_url = format!(
        "https://github.com/{}/{}.git",
        credentials.username, config.slug
    );

    git_step(dir, Step::Init, &["init"])?;
    git_step(dir, Step::RemoteAdd, &["remote", "add", "origin", &remote_url])?;
    git_step(dir, Step::Stage, &["add", "--all"])?;
    git_step(dir, Step::Commit, &["commit", "-m", COMMIT_MESSAGE])?;
    push_step(dir, credentials)?;

    log!("Published", "initial commit to `{}`", remote_url);

    Ok(())
}

/// Creates the remote repository through the GitHub API.
fn create_remote(slug: &str, credentials: &Credentials) -> Result<(), PublishError> {
    let fail = |detail: String| PublishError {
        step: Step::CreateRemote,
        detail,
    };

    let response = reqwest::blocking::Client::new()
        .post(API_ENDPOINT)
        .basic_auth(&credentials.username, Some(&credentials.password))
        .header(USER_AGENT, concat!("sitekit/", env!("CARGO_PKG_VERSION")))
        .json(&CreateRepoRequest { name: slug })
        .send()
        .map_err(|e| fail(e.to_string()))?;

    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        let detail = response
            .json::<ApiError>()
            .map(|e| e.message)
            .unwrap_or_else(|_| status.to_string());

        Err(fail(format!("the API returned {}: {}", status, detail)))
    }
}

/// Runs one git invocation of the chain, mapping a non-zero exit to a
/// [`PublishError`] naming the command and arguments.
fn git_step(dir: &Path, step: Step, args: &[&str]) -> Result<(), PublishError> {
    let output = git::run(dir, args).map_err(|e| PublishError {
        step,
        detail: format!("could not invoke git: {}", e),
    })?;

    finish_step(step, args, output)
}

fn push_step(dir: &Path, credentials: &Credentials) -> Result<(), PublishError> {
    let output =
        git::push(dir, &credentials.username, &credentials.password).map_err(|e| PublishError {
            step: Step::Push,
            detail: format!("could not invoke git: {}", e),
        })?;

    finish_step(Step::Push, &["push", "-u", "origin", "master"], output)
}

fn finish_step(step: Step, args: &[&str], output: std::process::Output) -> Result<(), PublishError> {
    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);

        if !stdout.trim().is_empty() {
            verbose!("Running", "git {} - {}", args[0], stdout.trim());
        }

        Ok(())
    } else {
        Err(PublishError {
            step,
            detail: format!(
                "`git {}` failed:\n  {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        })
    }
}

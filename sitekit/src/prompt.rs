//! Provides the interactive prompt sequence.

use crate::git;

use sitekit_core::config::{Features, DEFAULT_BUILD, DEFAULT_SOURCE, FEATURE_CATALOG};
use sitekit_core::ProjectConfig;

use inquire::{InquireError, MultiSelect, Password, Text};

/// GitHub credentials; the presence of both fields is the sole gate for
/// the remote publisher.
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Builds the publisher gate from the collected answers.
    ///
    /// Both a username and a password are required; a blank username or a
    /// declined password prompt yields `None`, so the publisher issues no
    /// HTTP call and no git commands for that run.
    pub fn from_answers(username: &str, password: Option<String>) -> Option<Self> {
        let username = username.trim();

        match password {
            Some(password) if !username.is_empty() => Some(Self {
                username: username.to_string(),
                password,
            }),
            _ => None,
        }
    }
}

/// Everything collected from the interactive session.
pub struct Answers {
    pub config: ProjectConfig,
    pub credentials: Option<Credentials>,
}

/// Runs the interactive session and builds the immutable configuration.
///
/// The author name and email are sourced from the ambient git identity,
/// not prompted for.
pub fn collect() -> Result<Answers, InquireError> {
    let title = Text::new("Project name").prompt()?;

    let domain = Text::new("Domain name")
        .with_help_message("a directory with this name will be created")
        .prompt()?;

    let source = Text::new("Source directory")
        .with_default(DEFAULT_SOURCE)
        .prompt()?;

    let build = Text::new("Build directory")
        .with_default(DEFAULT_BUILD)
        .prompt()?;

    let features = select_features()?;

    let username = Text::new("GitHub username")
        .with_help_message("leave empty to skip creating a remote repository")
        .prompt()?;

    let password = if username.trim().is_empty() {
        None
    } else {
        Some(
            Password::new("GitHub password")
                .without_confirmation()
                .prompt()?,
        )
    };

    let credentials = Credentials::from_answers(&username, password);

    let config = ProjectConfig::new(
        title,
        domain.trim().to_string(),
        Some(source),
        Some(build),
        git::user_name(),
        git::user_email(),
        features,
    );

    Ok(Answers {
        config,
        credentials,
    })
}

/// Presents the feature catalog as a checkbox list with its per-feature
/// default checked state.
fn select_features() -> Result<Features, InquireError> {
    let labels: Vec<&str> = FEATURE_CATALOG.iter().map(|choice| choice.label).collect();

    let defaults: Vec<usize> = FEATURE_CATALOG
        .iter()
        .enumerate()
        .filter(|(_, choice)| choice.default_enabled)
        .map(|(i, _)| i)
        .collect();

    let selected = MultiSelect::new("Which features would you like?", labels)
        .with_default(&defaults)
        .prompt()?;

    Ok(Features::from_keys(
        FEATURE_CATALOG
            .iter()
            .filter(|choice| selected.contains(&choice.label))
            .map(|choice| choice.key),
    ))
}

#[cfg(test)]
mod tests {
    use super::Credentials;

    #[test]
    fn publisher_gate_requires_both_fields() {
        assert!(Credentials::from_answers("", Some("hunter2".to_string())).is_none());
        assert!(Credentials::from_answers("   ", Some("hunter2".to_string())).is_none());
        assert!(Credentials::from_answers("jo", None).is_none());
        assert!(Credentials::from_answers("", None).is_none());
    }

    #[test]
    fn publisher_gate_trims_the_username() {
        let credentials =
            Credentials::from_answers(" jo ", Some("hunter2".to_string())).unwrap();

        assert_eq!(credentials.username, "jo");
        assert_eq!(credentials.password, "hunter2");
    }
}

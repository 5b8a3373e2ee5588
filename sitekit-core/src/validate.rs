//! Pre-flight validation of a project configuration.

use crate::config::ProjectConfig;

use std::path::Path;

/// A reason the configuration was rejected.
///
/// Each variant maps to a distinct process exit code so that callers can
/// tell the rejections apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The project title produced an empty slug.
    EmptyProjectName,
    /// The domain does not have the shape of a valid domain name.
    InvalidDomain(String),
    /// A directory with the domain's name already exists.
    DirectoryExists(String),
}

impl ValidationError {
    /// The process exit code associated with this rejection.
    pub fn exit_code(&self) -> i32 {
        match self {
            ValidationError::EmptyProjectName => 1,
            ValidationError::InvalidDomain(_) => 2,
            ValidationError::DirectoryExists(_) => 3,
        }
    }
}

/// Validates the configuration before any filesystem mutation.
///
/// Checks are evaluated in a fixed order and short-circuit: project name,
/// then domain shape, then whether the target directory already exists
/// under `parent`. Only reads the filesystem, never writes.
pub fn validate(config: &ProjectConfig, parent: &Path) -> Result<(), ValidationError> {
    if config.slug.trim().is_empty() {
        return Err(ValidationError::EmptyProjectName);
    }

    if !is_valid_domain(&config.domain) {
        return Err(ValidationError::InvalidDomain(config.domain.clone()));
    }

    if parent.join(&config.domain).exists() {
        return Err(ValidationError::DirectoryExists(config.domain.clone()));
    }

    Ok(())
}

/// Checks the domain shape constraint.
///
/// The domain must be 4 to 253 characters long and consist of at least two
/// dot-separated labels. Every label is 1 to 63 characters of
/// `[A-Za-z0-9-]`, must not start with a hyphen, and must end with an
/// alphanumeric character. The final label is the TLD: alphabetic only,
/// 2 to 63 characters.
pub fn is_valid_domain(domain: &str) -> bool {
    if !(4..=253).contains(&domain.len()) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();

    if labels.len() < 2 {
        return false;
    }

    let (tld, rest) = labels.split_last().unwrap();

    if !(2..=63).contains(&tld.len()) || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    rest.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && label.ends_with(|c: char| c.is_ascii_alphanumeric())
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Features;

    fn config(title: &str, domain: &str) -> ProjectConfig {
        ProjectConfig::new(title, domain, None, None, None, None, Features::default())
    }

    #[test]
    fn accepts_valid_domains() {
        for domain in [
            "test.com",
            "a.io",
            "sub.domain.co.uk",
            "my-site.example.org",
            "123.net",
        ] {
            assert!(is_valid_domain(domain), "{} should be valid", domain);
        }
    }

    #[test]
    fn rejects_malformed_domains() {
        let too_long = format!("{}.com", "a".repeat(251));

        for domain in [
            "",
            "a",
            "a.b",
            "test",
            "-bad.com",
            "bad-.com",
            "bad..com",
            "test.c",
            "test.c0m",
            "spa ce.com",
            too_long.as_str(),
        ] {
            assert!(!is_valid_domain(domain), "{:?} should be invalid", domain);
        }
    }

    #[test]
    fn validation_order_is_name_then_domain_then_directory() {
        let dir = tempfile::tempdir().unwrap();

        // An empty name wins even when the domain is also malformed.
        assert_eq!(
            validate(&config("", "not a domain"), dir.path()),
            Err(ValidationError::EmptyProjectName)
        );

        assert_eq!(
            validate(&config("Test Site", "-bad.com"), dir.path()),
            Err(ValidationError::InvalidDomain("-bad.com".to_string()))
        );

        std::fs::create_dir(dir.path().join("test.com")).unwrap();

        assert_eq!(
            validate(&config("Test Site", "test.com"), dir.path()),
            Err(ValidationError::DirectoryExists("test.com".to_string()))
        );
    }

    #[test]
    fn accepts_a_fresh_valid_configuration() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(validate(&config("Test Site", "test.com"), dir.path()), Ok(()));
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            ValidationError::EmptyProjectName.exit_code(),
            ValidationError::InvalidDomain(String::new()).exit_code(),
            ValidationError::DirectoryExists(String::new()).exit_code(),
        ];

        assert_eq!(codes, [1, 2, 3]);
    }
}

//! The project configuration record and the feature catalog.

use crate::slug::slugify;

/// The default name of the authoring tree.
pub const DEFAULT_SOURCE: &str = "src";

/// The default name of the build output tree.
pub const DEFAULT_BUILD: &str = "dist";

/// The protocol rendered into templates.
pub const PROTOCOL: &str = "http";

/// A single entry of the feature catalog.
#[derive(Clone, Copy, Debug)]
pub struct FeatureChoice {
    /// The key identifying the feature in [`Features`].
    pub key: &'static str,
    /// The label shown when prompting.
    pub label: &'static str,
    /// Whether the feature is selected by default.
    pub default_enabled: bool,
}

/// The fixed catalog of selectable features.
pub const FEATURE_CATALOG: &[FeatureChoice] = &[
    FeatureChoice {
        key: "boneless",
        label: "Boneless",
        default_enabled: true,
    },
    FeatureChoice {
        key: "jquery",
        label: "jQuery",
        default_enabled: false,
    },
];

/// The feature toggles selected at generation time.
///
/// Unselected features are off: the per-feature defaults in
/// [`FEATURE_CATALOG`] only drive the prompt's pre-checked state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Features {
    /// Whether to generate the Boneless base stylesheet.
    pub boneless: bool,
    /// Whether to declare the jQuery dependency.
    pub jquery: bool,
}

impl Features {
    /// Builds the toggle set from a list of selected catalog keys.
    ///
    /// Unrecognised keys are ignored.
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut features = Self::default();

        for key in keys {
            match key {
                "boneless" => features.boneless = true,
                "jquery" => features.jquery = true,
                _ => (),
            }
        }

        features
    }
}

/// The immutable project configuration.
///
/// Built once from the prompt answers and the ambient git identity, then
/// consumed by every later stage of the pipeline.
#[derive(Clone, Debug)]
pub struct ProjectConfig {
    /// The free-form display name of the project.
    pub title: String,
    /// The identifier derived from `title`, used for the package name, the
    /// remote repository name, and feature-gated destination filenames.
    pub slug: String,
    /// The domain name, used as the project root directory name.
    pub domain: String,
    /// The name of the authoring tree.
    pub source: String,
    /// The name of the build output tree.
    pub build: String,
    /// The author's display name, from the ambient git configuration.
    pub author: Option<String>,
    /// The author's email address, from the ambient git configuration.
    pub email: Option<String>,
    /// The selected feature toggles.
    pub features: Features,
}

impl ProjectConfig {
    /// Constructs the configuration, deriving the slug and filling in the
    /// conventional directory names where unspecified.
    pub fn new(
        title: impl Into<String>,
        domain: impl Into<String>,
        source: Option<String>,
        build: Option<String>,
        author: Option<String>,
        email: Option<String>,
        features: Features,
    ) -> Self {
        let title = title.into();
        let slug = slugify(&title);

        Self {
            title,
            slug,
            domain: domain.into(),
            source: source
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SOURCE.to_string()),
            build: build
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BUILD.to_string()),
            author,
            email,
            features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_slug_and_defaults() {
        let config = ProjectConfig::new(
            "Test Site",
            "test.com",
            None,
            None,
            None,
            None,
            Features::default(),
        );

        assert_eq!(config.slug, "test-site");
        assert_eq!(config.source, DEFAULT_SOURCE);
        assert_eq!(config.build, DEFAULT_BUILD);
    }

    #[test]
    fn blank_directory_names_fall_back_to_defaults() {
        let config = ProjectConfig::new(
            "Test Site",
            "test.com",
            Some("  ".to_string()),
            Some("out".to_string()),
            None,
            None,
            Features::default(),
        );

        assert_eq!(config.source, DEFAULT_SOURCE);
        assert_eq!(config.build, "out");
    }

    #[test]
    fn features_from_keys() {
        assert_eq!(
            Features::from_keys(std::iter::empty::<&str>()),
            Features::default()
        );
        assert_eq!(
            Features::from_keys(["boneless", "jquery"]),
            Features {
                boneless: true,
                jquery: true
            }
        );
        assert_eq!(
            Features::from_keys(["jquery", "unknown"]),
            Features {
                boneless: false,
                jquery: true
            }
        );
    }
}

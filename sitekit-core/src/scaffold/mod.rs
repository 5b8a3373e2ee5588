//! The file-generation pipeline: directories, rendered templates and static
//! copies, in that order, relative to the project root.

mod render;

pub use render::{render, TemplateVars};

use crate::config::ProjectConfig;

use std::borrow::Cow;
use std::fs::{create_dir_all, write};
use std::path::{Path, PathBuf};

/// A source of template bytes, addressed by path relative to the template
/// root.
///
/// The CLI implements this over the embedded template directory; tests
/// implement it over an in-memory map.
pub trait TemplateSource {
    /// Returns the contents of the template at `path`, if present.
    fn read(&self, path: &str) -> Option<Cow<'_, [u8]>>;
}

/// Templated files, rendered with variable substitution. The leading `_`
/// marker is stripped from the destination name.
const RENDERED_TEMPLATES: &[&str] = &["_package.json", "bower.json", "_Gruntfile.js"];

/// The feature-gated base stylesheet, rendered under a slug-derived
/// destination name when the `boneless` toggle is set.
const BONELESS_TEMPLATE: &str = "boneless.scss";

/// Static files, copied byte-for-byte: (destination prefix, names,
/// extension).
const STATIC_FILES: &[(&str, &[&str], &str)] = &[
    ("", &[".gitignore", "_credentials.json", "README.md"], ""),
    (
        "grunt/config/",
        &[
            "assemble",
            "clean",
            "cmq",
            "compass",
            "concat",
            "concurrent",
            "connect",
            "csslint",
            "htmllint",
            "htmlmin",
            "imagemin",
            "jshint",
            "pagespeed",
            "postcss",
            "sftp",
            "sshexec",
            "uglify",
            "uncss",
            "watch",
            "xml_sitemap",
        ],
        ".js",
    ),
    ("grunt/tasks/", &["build", "default", "deploy"], ".js"),
];

/// Returns the fixed subdirectory catalog, relative to the project root.
pub fn directory_catalog(config: &ProjectConfig) -> Vec<PathBuf> {
    let source = Path::new(&config.source);

    vec![
        PathBuf::from("grunt/config"),
        PathBuf::from("grunt/tasks"),
        source.join("config/sass/pages"),
        source.join("config/helpers"),
        source.join("config/layouts"),
        source.join("config/partials"),
        source.join("config/scripts"),
        source.join("content/_pages"),
        source.join("content/blog"),
        source.join("images"),
        PathBuf::from(&config.build),
    ]
}

/// A scaffolding failure. Fatal, unlike a missing template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScaffoldError {
    /// A directory could not be created.
    CreateDir(PathBuf),
    /// A file could not be written.
    Write(PathBuf),
}

/// The accumulated results of a scaffold run.
#[derive(Clone, Debug, Default)]
pub struct ScaffoldReport {
    /// Destination paths of rendered files.
    pub rendered: Vec<PathBuf>,
    /// Destination paths of copied files.
    pub copied: Vec<PathBuf>,
    /// Template identifiers absent from the source. Missing templates are
    /// warnings, not errors: generation continues with a gap.
    pub missing: Vec<String>,
}

/// Drives the file-generation pipeline for a validated configuration.
pub struct Scaffolder<'a> {
    config: &'a ProjectConfig,
    root: PathBuf,
}

impl<'a> Scaffolder<'a> {
    /// Creates a scaffolder that writes the project into
    /// `parent/<domain>`.
    pub fn new(config: &'a ProjectConfig, parent: impl AsRef<Path>) -> Self {
        Self {
            config,
            root: parent.as_ref().join(&config.domain),
        }
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Runs every stage in order, returning the report.
    pub fn run(&self, source: &dyn TemplateSource) -> Result<ScaffoldReport, ScaffoldError> {
        let mut report = ScaffoldReport::default();

        self.create_directories()?;
        self.render_templates(source, &mut report)?;
        self.copy_static(source, &mut report)?;

        Ok(report)
    }

    /// Creates the project root and the fixed subdirectory catalog.
    ///
    /// Creation is idempotent for every subdirectory; the project root
    /// itself must not pre-exist, which the validator enforces before any
    /// mutation happens.
    pub fn create_directories(&self) -> Result<(), ScaffoldError> {
        create_dir_all(&self.root).map_err(|_| ScaffoldError::CreateDir(self.root.clone()))?;

        for dir in directory_catalog(self.config) {
            let path = self.root.join(dir);
            create_dir_all(&path).map_err(|_| ScaffoldError::CreateDir(path.clone()))?;
        }

        Ok(())
    }

    /// Renders the templated files into the project root.
    pub fn render_templates(
        &self,
        source: &dyn TemplateSource,
        report: &mut ScaffoldReport,
    ) -> Result<(), ScaffoldError> {
        let vars = TemplateVars::from_config(self.config);

        for name in RENDERED_TEMPLATES {
            let dest = self.root.join(strip_marker(name));
            self.render_one(source, name, &dest, &vars, report)?;
        }

        if self.config.features.boneless {
            let dest = self
                .root
                .join(&self.config.source)
                .join("config/sass")
                .join(format!("{}.scss", self.config.slug));

            self.render_one(source, BONELESS_TEMPLATE, &dest, &vars, report)?;
        }

        Ok(())
    }

    /// Copies the static file catalog byte-for-byte.
    pub fn copy_static(
        &self,
        source: &dyn TemplateSource,
        report: &mut ScaffoldReport,
    ) -> Result<(), ScaffoldError> {
        for (prefix, names, ext) in STATIC_FILES {
            for name in *names {
                let rel = format!("{}{}{}", prefix, name, ext);

                match source.read(&rel) {
                    Some(bytes) => {
                        let dest = self.root.join(&rel);
                        write(&dest, bytes).map_err(|_| ScaffoldError::Write(dest.clone()))?;
                        report.copied.push(dest);
                    }
                    None => report.missing.push(rel),
                }
            }
        }

        Ok(())
    }

    fn render_one(
        &self,
        source: &dyn TemplateSource,
        name: &str,
        dest: &Path,
        vars: &TemplateVars,
        report: &mut ScaffoldReport,
    ) -> Result<(), ScaffoldError> {
        let raw = match source.read(name) {
            Some(raw) => raw,
            None => {
                report.missing.push(name.to_string());
                return Ok(());
            }
        };

        let rendered = render(&String::from_utf8_lossy(&raw), vars);
        write(dest, rendered).map_err(|_| ScaffoldError::Write(dest.to_path_buf()))?;
        report.rendered.push(dest.to_path_buf());

        Ok(())
    }
}

/// Strips the leading `_` marker from a rendered template identifier.
fn strip_marker(name: &str) -> &str {
    name.strip_prefix('_').unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::strip_marker;

    #[test]
    fn strip_marker_only_removes_leading_underscore() {
        assert_eq!(strip_marker("_package.json"), "package.json");
        assert_eq!(strip_marker("bower.json"), "bower.json");
        assert_eq!(strip_marker("_Gruntfile.js"), "Gruntfile.js");
        assert_eq!(strip_marker(".gitignore"), ".gitignore");
    }
}

//! Core scaffolding logic for the sitekit generator.
//!
//! The crate implements the non-interactive half of the pipeline: the
//! immutable [`ProjectConfig`] record, slug derivation, pre-flight
//! validation, and the file-generation stages (directory catalog, template
//! rendering, static copying). Prompting, logging and remote publishing
//! live in the CLI crate.

pub mod config;
pub mod scaffold;
pub mod slug;
pub mod validate;

pub use config::{Features, ProjectConfig};
pub use scaffold::{ScaffoldError, ScaffoldReport, Scaffolder, TemplateSource};
pub use slug::slugify;
pub use validate::{validate, ValidationError};

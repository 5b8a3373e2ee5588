//! The sitekit CLI: an interactive scaffolding generator for
//! Assemble-based static sites.

#[macro_use]
mod logger;

mod error;
mod git;
mod install;
mod prompt;
mod publish;

use crate::error::SitekitError;
use crate::logger::{LogLevel, Logger};

use sitekit_core::{validate, Scaffolder, TemplateSource};

use clap::{App, Arg};
use include_dir::{include_dir, Dir};

use std::borrow::Cow;
use std::path::Path;

/// The template and static asset set, built into the binary when compiled.
static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/../templates");

/// Adapts the embedded directory to the scaffolder's template seam.
struct EmbeddedTemplates;

impl TemplateSource for EmbeddedTemplates {
    fn read(&self, path: &str) -> Option<Cow<'_, [u8]>> {
        TEMPLATES.get_file(path).map(|f| Cow::Borrowed(f.contents()))
    }
}

fn main() {
    let matches = App::new("sitekit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive scaffolding generator for Assemble-based static sites")
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Suppresses log output"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Shows output from subprocesses"),
        )
        .arg(
            Arg::new("skip-install")
                .long("skip-install")
                .help("Skips dependency installation after generation"),
        )
        .get_matches();

    let level = if matches.is_present("quiet") {
        LogLevel::Quiet
    } else if matches.is_present("verbose") {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    Logger::new(level).register();

    if let Err(e) = run(matches.is_present("skip-install")) {
        e.print();
        std::process::exit(e.exit_code());
    }
}

/// Runs the pipeline: prompt, validate, scaffold, install, publish.
fn run(skip_install: bool) -> Result<(), Box<dyn SitekitError>> {
    let answers = prompt::collect()?;
    let config = answers.config;

    validate(&config, Path::new("."))?;

    let scaffolder = Scaffolder::new(&config, ".");
    let report = scaffolder.run(&EmbeddedTemplates)?;

    for missing in &report.missing {
        warn!("template `{}` not found, skipping", missing);
    }

    log!(
        "Created",
        "`{}` ({} rendered, {} copied)",
        config.domain,
        report.rendered.len(),
        report.copied.len()
    );

    if !skip_install {
        install::install(scaffolder.root());
    }

    if let Some(credentials) = &answers.credentials {
        publish::publish(&config, credentials, scaffolder.root())?;
    }

    log!("Finished", "new project `{}`", config.title);

    Ok(())
}

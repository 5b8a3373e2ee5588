//! Error display and exit-code mapping for the CLI.

use crate::publish::PublishError;

use sitekit_core::{ScaffoldError, ValidationError};

use termcolor::{Buffer, BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

use std::io::Write;

pub trait SitekitError {
    fn display(&self, buf: &mut Buffer);

    /// The process exit code for this error.
    ///
    /// Validation rejections carry distinct codes; everything else exits 1.
    fn exit_code(&self) -> i32 {
        1
    }

    fn print(&self) {
        let writer = BufferWriter::stderr(ColorChoice::Always);
        let mut buffer = writer.buffer();

        buffer
            .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_intense(true))
            .unwrap();
        write!(buffer, "error: ").unwrap();
        buffer.reset().unwrap();

        self.display(&mut buffer);
        writer.print(&buffer).unwrap();
    }
}

impl SitekitError for ValidationError {
    fn display(&self, buf: &mut Buffer) {
        match self {
            ValidationError::EmptyProjectName => "project name not specified".display(buf),
            ValidationError::InvalidDomain(domain) => format!(
                "domain is not valid, cannot create folder (domain: \"{}\")",
                domain
            )
            .display(buf),
            ValidationError::DirectoryExists(domain) => {
                format!("directory `{}` already exists", domain).display(buf)
            }
        }
    }

    fn exit_code(&self) -> i32 {
        ValidationError::exit_code(self)
    }
}

impl SitekitError for ScaffoldError {
    fn display(&self, buf: &mut Buffer) {
        match self {
            ScaffoldError::CreateDir(path) => {
                format!("could not create directory `{}`", path.display()).display(buf)
            }
            ScaffoldError::Write(path) => {
                format!("could not write file `{}`", path.display()).display(buf)
            }
        }
    }
}

impl SitekitError for PublishError {
    fn display(&self, buf: &mut Buffer) {
        format!("publishing failed while {}:\n  {}", self.step, self.detail).display(buf)
    }
}

impl SitekitError for str {
    fn display(&self, buf: &mut Buffer) {
        writeln!(buf, "{}", self).unwrap();
    }
}

impl SitekitError for String {
    fn display(&self, buf: &mut Buffer) {
        writeln!(buf, "{}", self).unwrap();
    }
}

impl SitekitError for inquire::InquireError {
    fn display(&self, buf: &mut Buffer) {
        writeln!(buf, "{}", self).unwrap();
    }
}

impl<T: SitekitError + 'static> From<T> for Box<dyn SitekitError> {
    fn from(t: T) -> Self {
        Box::new(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_exit_codes_pass_through() {
        let errors: [&dyn SitekitError; 3] = [
            &ValidationError::EmptyProjectName,
            &ValidationError::InvalidDomain("x".to_string()),
            &ValidationError::DirectoryExists("x".to_string()),
        ];

        assert_eq!(
            errors.map(|e| e.exit_code()),
            [1, 2, 3],
            "each rejection must be distinguishable"
        );
    }

    #[test]
    fn other_errors_exit_with_one() {
        assert_eq!(SitekitError::exit_code(&"oh no".to_string()), 1);
        assert_eq!(
            ScaffoldError::Write(std::path::PathBuf::from("x")).exit_code(),
            1
        );
    }
}

//! Provides the global logger and its macros.

use once_cell::sync::OnceCell;

pub static LOGGER: OnceCell<Logger> = OnceCell::new();

#[derive(Debug)]
pub struct Logger {
    pub level: LogLevel,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LogLevel {
    Quiet,
    Normal,
    Verbose,
}

impl Logger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    pub fn register(self) {
        LOGGER.set(self).unwrap();
    }
}

/// Logs a progress line: a right-aligned green verb followed by the message.
#[macro_export]
macro_rules! log {
    ($verb:expr, $($arg:tt)*) => {
        if let Some(logger) = $crate::logger::LOGGER.get() {
            if logger.level != $crate::logger::LogLevel::Quiet {
                use ::termcolor::*;
                use std::io::Write;

                let writer = BufferWriter::stderr(ColorChoice::Always);
                let mut buffer = writer.buffer();

                buffer
                    .set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_intense(true))
                    .unwrap();
                write!(buffer, "{:>12} ", $verb).unwrap();
                buffer.reset().unwrap();

                writeln!(buffer, $($arg)*).unwrap();

                writer.print(&buffer).unwrap();
            }
        }
    };
}

/// Logs a non-fatal warning with a yellow `warning:` prefix.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if let Some(logger) = $crate::logger::LOGGER.get() {
            if logger.level != $crate::logger::LogLevel::Quiet {
                use ::termcolor::*;
                use std::io::Write;

                let writer = BufferWriter::stderr(ColorChoice::Always);
                let mut buffer = writer.buffer();

                buffer
                    .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_intense(true))
                    .unwrap();
                write!(buffer, "warning: ").unwrap();
                buffer.reset().unwrap();

                writeln!(buffer, $($arg)*).unwrap();

                writer.print(&buffer).unwrap();
            }
        }
    };
}

/// Logs only at the verbose level, for subprocess output.
#[macro_export]
macro_rules! verbose {
    ($verb:expr, $($arg:tt)*) => {
        if let Some(logger) = $crate::logger::LOGGER.get() {
            if logger.level == $crate::logger::LogLevel::Verbose {
                $crate::log!($verb, $($arg)*);
            }
        }
    };
}

//! Error types for the Bubbletrace system.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// Result type alias used across Bubbletrace crates.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Bubbletrace operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an invalid number error for an input token.
    #[must_use]
    pub fn invalid_number(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumber {
            token: token.into(),
        })
    }

    /// Creates an error for an integer token too large to record.
    #[must_use]
    pub fn number_out_of_range(token: impl Into<String>) -> Self {
        Self::new(ErrorKind::NumberOutOfRange {
            token: token.into(),
        })
    }

    /// Creates an unknown command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownCommand(name.into()))
    }

    /// Creates a missing argument error.
    #[must_use]
    pub fn missing_argument(command: &'static str, expected: &'static str) -> Self {
        Self::new(ErrorKind::MissingArgument { command, expected })
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(command: &'static str, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument {
            command,
            message: message.into(),
        })
    }

    /// Creates a terminal error.
    #[must_use]
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Terminal(message.into()))
    }

    /// Returns true if this error means "there was nothing to sort".
    ///
    /// These kinds degrade to an empty trace at the recorder boundary.
    #[must_use]
    pub fn is_unusable_input(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidNumber { .. }
                | ErrorKind::NumberOutOfRange { .. }
                | ErrorKind::EmptyInput
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A token in the input list is not an integer.
    #[error("not a number: {token:?}")]
    InvalidNumber {
        /// The offending token, trimmed.
        token: String,
    },

    /// A token is an integer but does not fit in 64 bits.
    #[error("number out of range: {token:?} (values must fit in 64 bits)")]
    NumberOutOfRange {
        /// The offending token, trimmed.
        token: String,
    },

    /// The input list contained no numbers.
    #[error("input contains no numbers")]
    EmptyInput,

    /// The REPL did not recognize a command.
    #[error("unknown command: {0} (type `help` for a list)")]
    UnknownCommand(String),

    /// A command was issued without a required argument.
    #[error("{command} requires an argument: {expected}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
        /// Description of the expected argument.
        expected: &'static str,
    },

    /// A command argument could not be interpreted.
    #[error("invalid argument to {command}: {message}")]
    InvalidArgument {
        /// The command name.
        command: &'static str,
        /// What was wrong with the argument.
        message: String,
    },

    /// The terminal could not be read or configured.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// An I/O operation failed.
    #[error("i/o error: {0}")]
    Io(std::io::Error),

    /// A trace could not be serialized for export.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

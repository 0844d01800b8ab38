//! Error types for the bot.
//!
//! Only boundary failures are represented here: malformed turn input, I/O
//! on the protocol streams, and snapshot encoding. Inconsistencies inside
//! the forward model are programming errors and panic instead.

use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("input ended while reading {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("malformed {what} in line '{line}': {message}")]
    Parse {
        what: &'static str,
        line: String,
        message: String,
    },

    #[error("unknown card location code {0}")]
    InvalidLocation(i32),

    #[error("unknown card type code {0}")]
    InvalidCardType(i32),

    #[error("invalid ability token '{0}' (expected 6 characters from 'BCDGLW' or '-')")]
    InvalidAbilities(String),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),
}

impl Error {
    /// Wrap an I/O error with the operation that failed.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

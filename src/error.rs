//! Parse error types.

use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// A flag or secure field did not match the boolean-token grammar.
///
/// The grammar accepts `"1"`/`"0"` and any case variant of
/// `"TRUE"`/`"FALSE"`; everything else is invalid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("expect TRUE/FALSE or 1/0, got {token:?}")]
pub struct BoolTokenError {
    /// The raw offending token.
    pub token: String,
}

/// Reason a single candidate line failed validation.
///
/// Every variant is fatal to the parse call that produced it; there is
/// no skip-and-continue mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    /// Fewer whitespace-delimited tokens than the format requires.
    #[error("expecting fields={expected}, got={actual}")]
    FieldCount { expected: usize, actual: usize },
    /// The domain column was blank.
    #[error("empty domain")]
    EmptyDomain,
    /// The cookie-name column was blank.
    #[error("empty cookie name")]
    EmptyName,
    /// The subdomain-flag column is not a boolean token.
    #[error("invalid flag value: {0}")]
    Flag(#[source] BoolTokenError),
    /// The secure column is not a boolean token.
    #[error("invalid secure value: {0}")]
    Secure(#[source] BoolTokenError),
    /// The expiration column is not a signed 64-bit decimal integer.
    #[error("invalid expiration value {token:?}: {source}")]
    Expiration {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Error returned by the stream-level parse operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A candidate line failed validation, annotated with its 1-based
    /// physical line number.
    #[error("cookiestxt line:{line}, err:{source}")]
    Line {
        line: u64,
        #[source]
        source: LineError,
    },
    /// A physical line exceeded the scanner's buffer ceiling.
    #[error("cookiestxt line:{line}, err:line exceeds maximum length of {limit} bytes")]
    LineTooLong { line: u64, limit: usize },
    /// The underlying stream could not be read further. Not
    /// line-annotated, since no line was being parsed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

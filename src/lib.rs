//! # cookiestxt
//!
//! Parser for the Netscape cookie-jar ("cookies.txt") format, the
//! line-oriented text format used by curl, wget, aria2c and browser
//! exporters to persist cookies.
//!
//! See <http://www.cookiecentral.com/faq/#3.5> for the format's
//! original description. Each data line carries seven
//! whitespace-delimited columns:
//!
//! ```text
//! [#HttpOnly_]domain <WS> flag <WS> path <WS> secure <WS> expiration <WS> name [<WS> value]
//! ```
//!
//! Blank lines and `#`-comments are ignored, except that a line
//! starting with the exact prefix `#HttpOnly_` is cookie data: the
//! prefix marks the cookie as HTTP-only and is stripped from the
//! stored domain. The trailing value column may be omitted entirely,
//! in which case the value is the empty string.
//!
//! Parsing is strict: the first malformed line aborts the whole scan
//! with an error naming its 1-based physical line number. There is no
//! skip-and-continue mode.
//!
//! ## Quick start
//!
//! ```rust
//! let jar = cookiestxt::parse_str(
//!     "# Netscape HTTP Cookie File\n\
//!      #HttpOnly_.netscape.com\tTRUE\t/\tFALSE\t946684799\tNETSCAPE_ID\t100105\n",
//! )?;
//! assert_eq!(jar.len(), 1);
//! assert_eq!(jar[0].name, "NETSCAPE_ID");
//! assert_eq!(jar[0].domain, ".netscape.com");
//! assert!(jar[0].http_only);
//! # Ok::<(), cookiestxt::ParseError>(())
//! ```
//!
//! ## Modules
//!
//! - [`scanner`] - line reading, comment filtering, line numbering
//! - [`parser`] - single-line field validation
//! - [`record`] - the parsed [`CookieRecord`] and column layout
//! - [`error`] - error types

pub mod error;
pub mod parser;
pub mod record;
pub mod scanner;

pub use error::{BoolTokenError, LineError, ParseError};
pub use parser::parse_line;
pub use record::{CookieRecord, Field};
pub use scanner::{CandidateLine, LineScanner, INITIAL_LINE_CAPACITY, MAX_LINE_LEN};

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a whole cookies.txt stream into records, in input order.
///
/// The first malformed line aborts the scan with a
/// `cookiestxt line:<N>, err:<cause>` error; a stream-read failure
/// aborts with the underlying I/O error. An input with no data lines
/// yields an empty vector.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<CookieRecord>, ParseError> {
    let mut records = Vec::new();
    for candidate in LineScanner::new(reader) {
        let candidate = candidate?;
        let record = parse_line(&candidate.text).map_err(|source| ParseError::Line {
            line: candidate.number,
            source,
        })?;
        records.push(record);
    }
    tracing::debug!(count = records.len(), "parsed cookies.txt stream");
    Ok(records)
}

/// Parse cookies.txt content held in memory.
pub fn parse_str(input: &str) -> Result<Vec<CookieRecord>, ParseError> {
    parse(input.as_bytes())
}

/// Parse a cookies.txt file from disk.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<CookieRecord>, ParseError> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

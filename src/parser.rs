//! Single-line field validation and record construction.

use crate::error::{BoolTokenError, LineError};
use crate::record::{CookieRecord, Field};
use crate::scanner::HTTP_ONLY_PREFIX;

/// Parse one candidate line into a [`CookieRecord`].
///
/// The line is split on runs of spaces and tabs into the seven columns
/// of [`Field`]. A line with exactly six tokens is treated as having
/// an empty trailing value; this tolerates producers that omit a truly
/// empty value column. The shim applies only at the tail: a six-token
/// line missing a middle column instead fails validation of whichever
/// column its tokens land in. Tokens beyond the seventh are ignored,
/// matching the behavior of existing consumers of the format.
///
/// # Example
///
/// ```rust
/// let c = cookiestxt::parse_line(
///     ".netscape.com TRUE / TRUE 946684799 NETSCAPE_ID 100105",
/// )?;
/// assert_eq!(c.name, "NETSCAPE_ID");
/// assert_eq!(c.value, "100105");
/// # Ok::<(), cookiestxt::LineError>(())
/// ```
pub fn parse_line(raw: &str) -> Result<CookieRecord, LineError> {
    let raw = raw.trim();
    let mut fields: Vec<&str> = raw.split_ascii_whitespace().collect();
    if fields.len() == Field::COUNT - 1 {
        // missing value -> treat as empty
        fields.push("");
    } else if fields.len() < Field::COUNT {
        return Err(LineError::FieldCount {
            expected: Field::COUNT,
            actual: fields.len(),
        });
    }

    let raw_domain = fields[Field::Domain.idx()];
    if raw_domain.trim().is_empty() {
        return Err(LineError::EmptyDomain);
    }
    let name = fields[Field::Name.idx()];
    if name.trim().is_empty() {
        return Err(LineError::EmptyName);
    }

    // The flag column must be well formed even though its value is
    // derivable from the domain and goes unused.
    parse_bool_token(fields[Field::Flag.idx()]).map_err(LineError::Flag)?;

    let secure = parse_bool_token(fields[Field::Secure.idx()]).map_err(LineError::Secure)?;

    let raw_expiration = fields[Field::Expiration.idx()];
    let expiration: i64 = raw_expiration
        .parse()
        .map_err(|source| LineError::Expiration {
            token: raw_expiration.to_string(),
            source,
        })?;

    let (domain, http_only) = match raw_domain.strip_prefix(HTTP_ONLY_PREFIX) {
        Some(stripped) => (stripped.to_string(), true),
        None => (raw_domain.to_string(), false),
    };

    Ok(CookieRecord {
        domain,
        http_only,
        path: fields[Field::Path.idx()].to_string(),
        secure,
        expiration,
        name: name.to_string(),
        value: fields[Field::Value.idx()].to_string(),
        raw: raw.to_string(),
    })
}

/// Validate a boolean token per the format's grammar: `"1"`/`"0"`, or
/// `"TRUE"`/`"FALSE"` in any case.
fn parse_bool_token(token: &str) -> Result<bool, BoolTokenError> {
    let s = token.trim();
    if s == "1" || s == "0" {
        return Ok(s == "1");
    }
    if s.eq_ignore_ascii_case("TRUE") {
        return Ok(true);
    }
    if s.eq_ignore_ascii_case("FALSE") {
        return Ok(false);
    }
    Err(BoolTokenError {
        token: token.to_string(),
    })
}

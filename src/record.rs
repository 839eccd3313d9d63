//! Parsed cookie record and the fixed column layout of the format.

use cookie::Cookie;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Column order of a cookies.txt line.
///
/// The ordering is a fixed protocol contract, not configuration.
/// See <http://www.cookiecentral.com/faq/#3.5> for the original
/// description of each column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Field {
    /// The domain that created AND that can read the variable.
    Domain = 0,
    /// TRUE/FALSE value indicating if all machines within a given
    /// domain can access the variable.
    Flag,
    /// The path within the domain that the variable is valid for.
    Path,
    /// TRUE/FALSE value indicating if a secure connection is needed to
    /// access the variable.
    Secure,
    /// The UNIX time that the variable will expire on.
    Expiration,
    /// The name of the variable.
    Name,
    /// The value of the variable.
    Value,
}

impl Field {
    /// Number of columns in a well-formed line.
    pub const COUNT: usize = 7;

    pub(crate) fn idx(self) -> usize {
        self as usize
    }
}

/// One parsed cookies.txt line.
///
/// A record is built exactly once, by a single successful parse of one
/// line, and is immutable from then on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieRecord {
    /// Host (or `.`-prefixed domain-wide scope) the cookie belongs to,
    /// with the `#HttpOnly_` marker already stripped. Never empty.
    pub domain: String,
    /// True iff the raw domain column carried the `#HttpOnly_` marker.
    pub http_only: bool,
    /// URL path scope.
    pub path: String,
    /// True iff the secure column parsed as a truthy boolean token.
    pub secure: bool,
    /// Absolute expiry instant, Unix seconds. May be negative for
    /// pre-1970 instants.
    pub expiration: i64,
    /// Cookie name. Never empty.
    pub name: String,
    /// Cookie value. May be empty, including when the column was
    /// absent from the line.
    pub value: String,
    /// The original trimmed line text, retained for diagnostics.
    pub raw: String,
}

impl CookieRecord {
    /// Expiry instant as an [`OffsetDateTime`], or `None` if the raw
    /// timestamp falls outside the representable range.
    pub fn expires(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp(self.expiration).ok()
    }

    /// Whether the cookie's expiry instant lies before `current_time`.
    pub fn is_expired(&self, current_time: OffsetDateTime) -> bool {
        if let Some(expiry) = self.expires() {
            expiry < current_time
        } else {
            false
        }
    }

    /// Convert into an owned [`cookie::Cookie`] carrying the name,
    /// value, domain, path, secure/http-only flags, and expiry.
    pub fn to_cookie(&self) -> Cookie<'static> {
        let mut builder = Cookie::build((self.name.clone(), self.value.clone()))
            .domain(self.domain.clone())
            .path(self.path.clone())
            .secure(self.secure)
            .http_only(self.http_only);

        if let Some(expires) = self.expires() {
            builder = builder.expires(expires);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> CookieRecord {
        CookieRecord {
            domain: ".netscape.com".to_string(),
            http_only: true,
            path: "/".to_string(),
            secure: true,
            expiration: 946_684_799,
            name: "NETSCAPE_ID".to_string(),
            value: "100103".to_string(),
            raw: "#HttpOnly_.netscape.com TRUE / TRUE 946684799 NETSCAPE_ID 100103"
                .to_string(),
        }
    }

    #[test]
    fn test_expires() {
        let record = make_record();
        let expires = record.expires().unwrap();
        assert_eq!(expires.unix_timestamp(), 946_684_799);

        // Pre-epoch instants are representable too.
        let pre_epoch = CookieRecord {
            expiration: -1,
            ..make_record()
        };
        assert!(pre_epoch.expires().unwrap() < OffsetDateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_is_expired() {
        let record = make_record();
        let before = OffsetDateTime::from_unix_timestamp(946_684_798).unwrap();
        let after = OffsetDateTime::from_unix_timestamp(946_684_800).unwrap();
        assert!(!record.is_expired(before));
        assert!(record.is_expired(after));
    }

    #[test]
    fn test_to_cookie() {
        let record = make_record();
        let cookie = record.to_cookie();
        assert_eq!(cookie.name(), "NETSCAPE_ID");
        assert_eq!(cookie.value(), "100103");
        // Cookie::domain strips the leading dot.
        assert_eq!(cookie.domain(), Some("netscape.com"));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.http_only(), Some(true));
    }

    #[test]
    fn test_field_indices_follow_protocol_order() {
        assert_eq!(Field::Domain.idx(), 0);
        assert_eq!(Field::Flag.idx(), 1);
        assert_eq!(Field::Path.idx(), 2);
        assert_eq!(Field::Secure.idx(), 3);
        assert_eq!(Field::Expiration.idx(), 4);
        assert_eq!(Field::Name.idx(), 5);
        assert_eq!(Field::Value.idx(), 6);
        assert_eq!(Field::COUNT, 7);
    }
}

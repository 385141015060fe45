//! Link identifier type.

use std::fmt;

/// Error returned when parsing an invalid link id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid link id: {reason}")]
pub struct InvalidLinkId {
    reason: &'static str,
}

/// An opaque link identifier, the key under which a map file declares
/// a link.
///
/// Historical map files derive these keys from the endpoint station
/// ids; the crate does not depend on that encoding and treats the key
/// as an opaque digit-string token.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinkId(String);

impl LinkId {
    /// Parse a link id: a non-empty sequence of ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidLinkId> {
        if s.is_empty() {
            return Err(InvalidLinkId {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidLinkId {
                reason: "must contain only ASCII digits 0-9",
            });
        }

        Ok(LinkId(s.to_string()))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinkId({})", self.0)
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

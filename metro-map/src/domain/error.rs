//! Query and traversal error types.
//!
//! These errors cover lookups that miss and graph invariants that turn
//! out to be violated at query time. They are distinct from the
//! loader's [`LoadError`](crate::network::LoadError), which rejects a
//! payload before a network exists.

use super::{LinkId, StationId};

/// Errors surfaced by network queries and line traversal.
///
/// `StationNotFound` and `LinkNotFound` are recoverable lookup misses;
/// the caller decides what to do. The remaining variants mean the
/// graph data is internally inconsistent, and results derived from it
/// would be meaningless — they are always surfaced, never recovered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// No station with this id exists.
    #[error("station {0} not found")]
    StationNotFound(StationId),

    /// No link with this id exists.
    #[error("link {0} not found")]
    LinkNotFound(LinkId),

    /// A link was addressed from a station that is not one of its
    /// endpoints.
    #[error("link {link} does not touch station {station}")]
    LinkDoesNotTouch { link: LinkId, station: StationId },

    /// A non-junction station has a line degree outside [1, 2].
    #[error("station {station} has {degree} line links, expected 1 or 2")]
    UnexpectedLineDegree { station: StationId, degree: usize },

    /// A walk found more than one onward link, which implies the
    /// previous station was not actually adjacent.
    #[error("no unique continuation through station {station}")]
    AmbiguousContinuation { station: StationId },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    #[test]
    fn error_display() {
        let err = NetworkError::StationNotFound(sid("105"));
        assert_eq!(err.to_string(), "station 105 not found");

        let err = NetworkError::LinkNotFound(LinkId::parse("105106").unwrap());
        assert_eq!(err.to_string(), "link 105106 not found");

        let err = NetworkError::LinkDoesNotTouch {
            link: LinkId::parse("105106").unwrap(),
            station: sid("191"),
        };
        assert_eq!(err.to_string(), "link 105106 does not touch station 191");

        let err = NetworkError::UnexpectedLineDegree {
            station: sid("105"),
            degree: 4,
        };
        assert_eq!(
            err.to_string(),
            "station 105 has 4 line links, expected 1 or 2"
        );

        let err = NetworkError::AmbiguousContinuation {
            station: sid("105"),
        };
        assert_eq!(err.to_string(), "no unique continuation through station 105");
    }
}

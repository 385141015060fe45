//! The directional traversal primitive.

use tracing::trace;

use crate::domain::{NetworkError, StationId};
use crate::network::{Link, LinkKind, Network};

impl Network {
    /// Given the station we came from and the link just traversed,
    /// return the unique link continuing straight through, or `None`
    /// at a boundary.
    ///
    /// The current station is the endpoint of `current` far from
    /// `prev`. The walk stops (returns `None`) when that station is a
    /// junction, a transfer station, or a line end reached from its
    /// only neighbour. A link that does not touch `prev` at all, a
    /// line degree outside [1, 2], or more than one onward candidate
    /// all mean the graph is corrupt and fail with the corresponding
    /// [`NetworkError`].
    pub fn next_in_line(
        &self,
        prev: &StationId,
        current: &Link,
    ) -> Result<Option<&Link>, NetworkError> {
        let here = current
            .follow(prev)
            .ok_or_else(|| NetworkError::LinkDoesNotTouch {
                link: current.id.clone(),
                station: prev.clone(),
            })?;

        if self.is_junction_station(here)? {
            trace!(station = %here, "walk stops at junction");
            return Ok(None);
        }

        if self.is_transfer_station(here)? {
            trace!(station = %here, "walk stops at transfer station");
            return Ok(None);
        }

        let line_neighbours = self.neighbours(here, Some(LinkKind::Line))?;
        let degree = line_neighbours.len();
        if !(1..=2).contains(&degree) {
            return Err(NetworkError::UnexpectedLineDegree {
                station: here.clone(),
                degree,
            });
        }

        let mut onward = line_neighbours.iter().filter(|n| n.other != prev);
        match (onward.next(), onward.next()) {
            // Dead end: we arrived from the only neighbour.
            (None, _) => Ok(None),
            (Some(n), None) => Ok(Some(n.link)),
            // Degree 2 with both links pointing elsewhere: prev was
            // never adjacent to this station.
            (Some(_), Some(_)) => Err(NetworkError::AmbiguousContinuation {
                station: here.clone(),
            }),
        }
    }
}

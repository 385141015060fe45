//! Neighbour resolution and structural classification.
//!
//! Roles are derived from neighbour counts and link kinds on every
//! call. They are O(degree) and the network never mutates, so there is
//! nothing to cache.

use crate::domain::{NetworkError, StationId};

use super::model::{Link, LinkKind, Network};

/// An incident link together with the station on its far end.
#[derive(Debug, Clone, Copy)]
pub struct Neighbour<'a> {
    pub link: &'a Link,
    pub other: &'a StationId,
}

impl Network {
    /// Resolve a station's incident links, each annotated with the
    /// station on the other end.
    ///
    /// Order follows the station's stored link order. With a `kind`
    /// filter, links of the other kind are skipped. A link that
    /// touches neither endpoint means the graph is corrupt and fails
    /// with [`NetworkError::LinkDoesNotTouch`].
    pub fn neighbours(
        &self,
        id: &StationId,
        kind: Option<LinkKind>,
    ) -> Result<Vec<Neighbour<'_>>, NetworkError> {
        let station = self.station(id)?;

        let mut out = Vec::with_capacity(station.link_ids.len());
        for link_id in &station.link_ids {
            let link = self.link(link_id)?;
            if kind.is_some_and(|k| link.kind != k) {
                continue;
            }

            let other = link.follow(id).ok_or_else(|| NetworkError::LinkDoesNotTouch {
                link: link_id.clone(),
                station: id.clone(),
            })?;

            out.push(Neighbour { link, other });
        }

        Ok(out)
    }

    /// Ids of the stations reachable over line links, in stored link
    /// order.
    pub fn line_neighbour_ids(&self, id: &StationId) -> Result<Vec<&StationId>, NetworkError> {
        Ok(self
            .neighbours(id, Some(LinkKind::Line))?
            .into_iter()
            .map(|n| n.other)
            .collect())
    }

    /// Whether the station has at least one incident transfer link.
    ///
    /// Derived from the links, independent of the stored
    /// `isTransferStation` flag used by
    /// [`Network::transfer_stations`].
    pub fn is_transfer_station(&self, id: &StationId) -> Result<bool, NetworkError> {
        Ok(!self.neighbours(id, Some(LinkKind::Transfer))?.is_empty())
    }

    /// Whether the station is a line endpoint: exactly one line link.
    pub fn is_termination_station(&self, id: &StationId) -> Result<bool, NetworkError> {
        Ok(self.line_neighbour_ids(id)?.len() == 1)
    }

    /// Whether the station is a branch point: more than two line links.
    pub fn is_junction_station(&self, id: &StationId) -> Result<bool, NetworkError> {
        Ok(self.line_neighbour_ids(id)?.len() > 2)
    }
}

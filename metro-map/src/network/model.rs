//! Core network model: stations, links, and the lookup index.

use std::collections::{HashMap, HashSet};

use crate::domain::{LineId, LinkId, NetworkError, StationId};

/// Kind of connection between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// A same-line track segment.
    Line,
    /// A cross-line walking connection between co-located stations.
    Transfer,
}

/// An undirected connection between two stations.
///
/// `from`/`to` reproduce the payload's field names; the order carries
/// no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// The key under which the map payload declared this link.
    pub id: LinkId,
    pub from: StationId,
    pub to: StationId,
    pub kind: LinkKind,
    /// Traversal cost in minutes. Used only for aggregate sums.
    pub weight_time: f64,
}

impl Link {
    /// Returns the endpoint that is not `from`, or `None` if `from`
    /// matches neither endpoint.
    ///
    /// This is a pure query: a `None` is only an error in contexts
    /// (like the line walker) that require the link to be incident.
    pub fn follow(&self, from: &StationId) -> Option<&StationId> {
        if *from == self.from {
            Some(&self.to)
        } else if *from == self.to {
            Some(&self.from)
        } else {
            None
        }
    }
}

/// A single metro station.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    /// Display name. Not unique: stations on different lines may share
    /// a name (e.g. the three "Киевская" stations).
    pub name: String,
    pub line: LineId,
    /// Stored transfer flag from the payload (absent means false).
    pub is_transfer: bool,
    /// Incident links, in payload order.
    pub link_ids: Vec<LinkId>,
}

/// The full metro network.
///
/// Owns all stations and links plus an index from unordered station
/// pairs to the links between them. Constructed once by the loader and
/// immutable afterwards, so shared reads need no locking.
#[derive(Debug, Clone)]
pub struct Network {
    stations: HashMap<StationId, Station>,
    links: HashMap<LinkId, Link>,
    /// Unordered-pair index: key is the endpoint pair in sorted order.
    pairs: HashMap<(StationId, StationId), Vec<LinkId>>,
}

/// Normalized key for the unordered-pair index.
fn pair_key(a: &StationId, b: &StationId) -> (StationId, StationId) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}

impl Network {
    /// Assemble a network from already-validated parts.
    ///
    /// The loader has checked all cross-references by the time this
    /// runs; this only derives the pair index.
    pub(crate) fn from_parts(
        stations: HashMap<StationId, Station>,
        links: HashMap<LinkId, Link>,
    ) -> Self {
        let mut pairs: HashMap<(StationId, StationId), Vec<LinkId>> = HashMap::new();
        for link in links.values() {
            pairs
                .entry(pair_key(&link.from, &link.to))
                .or_default()
                .push(link.id.clone());
        }

        Self {
            stations,
            links,
            pairs,
        }
    }

    /// Look up a station by id.
    pub fn station(&self, id: &StationId) -> Result<&Station, NetworkError> {
        self.stations
            .get(id)
            .ok_or_else(|| NetworkError::StationNotFound(id.clone()))
    }

    /// Look up a link by id.
    pub fn link(&self, id: &LinkId) -> Result<&Link, NetworkError> {
        self.links
            .get(id)
            .ok_or_else(|| NetworkError::LinkNotFound(id.clone()))
    }

    /// All stations whose name matches `name` exactly, optionally
    /// restricted to one line.
    ///
    /// Case-sensitive, no fuzzy matching. An empty result is valid.
    pub fn stations_by_name(
        &self,
        name: &str,
        line: Option<LineId>,
    ) -> HashMap<&StationId, &Station> {
        self.stations
            .iter()
            .filter(|(_, station)| station.name == name)
            .filter(|(_, station)| line.is_none_or(|l| station.line == l))
            .collect()
    }

    /// Ids of every station in the network.
    pub fn station_ids(&self) -> HashSet<&StationId> {
        self.stations.keys().collect()
    }

    /// Stations with the stored transfer flag set.
    pub fn transfer_stations(&self) -> HashSet<&StationId> {
        self.stations
            .values()
            .filter(|s| s.is_transfer)
            .map(|s| &s.id)
            .collect()
    }

    /// Complement of [`Network::transfer_stations`] within all ids.
    pub fn non_transfer_stations(&self) -> HashSet<&StationId> {
        self.stations
            .values()
            .filter(|s| !s.is_transfer)
            .map(|s| &s.id)
            .collect()
    }

    /// All links between two stations, in either orientation.
    ///
    /// With `include_transfers` false only line links are returned.
    /// Unknown ids simply produce an empty result: the pair is absent
    /// from the index.
    pub fn links_between(
        &self,
        a: &StationId,
        b: &StationId,
        include_transfers: bool,
    ) -> Vec<&Link> {
        let Some(ids) = self.pairs.get(&pair_key(a, b)) else {
            return Vec::new();
        };

        ids.iter()
            .filter_map(|id| self.links.get(id))
            .filter(|link| include_transfers || link.kind == LinkKind::Line)
            .collect()
    }

    /// Whether any link (subject to the transfer filter) joins the two
    /// stations.
    pub fn are_adjacent(&self, a: &StationId, b: &StationId, include_transfers: bool) -> bool {
        !self.links_between(a, b, include_transfers).is_empty()
    }

    /// Number of stations in the network.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of links in the network.
    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Iterate over all stations, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }
}

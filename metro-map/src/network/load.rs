//! Loading and validation of map payloads.
//!
//! The wire format is a JSON object with two top-level maps:
//! `stations` (station id → record) and `links` (link id → record).
//! Historical map files are loose about id types — the same id may
//! appear as a JSON number in one place and a string in another — so
//! all ids pass through [`IdToken`] and are normalized to their
//! canonical string form before validation.
//!
//! Every cross-reference is checked here, before a [`Network`] exists.
//! Queries and traversal can therefore resolve stored link ids without
//! re-validating them.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::domain::{InvalidLinkId, InvalidStationId, LineId, LinkId, StationId};

use super::model::{Link, LinkKind, Network, Station};

/// Error rejecting a map payload at construction.
///
/// All variants are fatal: no partially-built network is ever exposed.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading the map file failed.
    #[error("failed to read map file: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not well-formed JSON of the expected shape.
    #[error("failed to parse map JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A required top-level field is absent.
    #[error("missing top-level field `{0}`")]
    MissingField(&'static str),

    /// A station id failed validation.
    #[error("station id `{token}`: {source}")]
    BadStationId {
        token: String,
        source: InvalidStationId,
    },

    /// A link id failed validation.
    #[error("link id `{token}`: {source}")]
    BadLinkId { token: String, source: InvalidLinkId },

    /// A link declared a type other than `link` or `transfer`.
    #[error("link {link}: unknown link type `{kind}`")]
    UnknownLinkType { link: LinkId, kind: String },

    /// A station lists a link id that no link was declared under.
    #[error("station {station} lists link {link}, which does not exist")]
    DanglingLink { station: StationId, link: LinkId },

    /// A station lists a link that has it as neither endpoint.
    #[error("station {station} lists link {link}, which does not touch it")]
    LinkEndpointMismatch { station: StationId, link: LinkId },

    /// A link endpoint is not a declared station.
    #[error("link {link} endpoint {station} is not a known station")]
    UnknownEndpoint { link: LinkId, station: StationId },

    /// A link's endpoint station does not list the link back.
    #[error("link {link} touches station {station}, which does not list it")]
    MissingBackReference { link: LinkId, station: StationId },
}

/// Top-level map payload as it appears on the wire.
///
/// Both fields are required; they are `Option` here only so that their
/// absence surfaces as [`LoadError::MissingField`] rather than a bare
/// serde error.
#[derive(Debug, Clone, Deserialize)]
pub struct MapPayload {
    pub stations: Option<HashMap<String, StationRecord>>,
    pub links: Option<HashMap<String, LinkRecord>>,
}

/// A station record as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub name: String,
    pub line_id: u32,
    #[serde(default)]
    pub is_transfer_station: bool,
    pub link_ids: Vec<IdToken>,
}

/// A link record as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRecord {
    pub from_station_id: IdToken,
    pub to_station_id: IdToken,
    #[serde(rename = "type")]
    pub link_type: String,
    pub weight_time: f64,
}

/// An id as it appears on the wire: a JSON number or a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdToken {
    Number(u64),
    Text(String),
}

impl IdToken {
    /// The canonical string form of the id.
    fn canonical(&self) -> String {
        match self {
            IdToken::Number(n) => n.to_string(),
            IdToken::Text(s) => s.clone(),
        }
    }
}

fn parse_station_id(token: &IdToken) -> Result<StationId, LoadError> {
    let token = token.canonical();
    StationId::parse(&token).map_err(|source| LoadError::BadStationId { token, source })
}

fn parse_link_id(token: &IdToken) -> Result<LinkId, LoadError> {
    let token = token.canonical();
    LinkId::parse(&token).map_err(|source| LoadError::BadLinkId { token, source })
}

impl Network {
    /// Load a network from a JSON map file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Load a network from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let payload: MapPayload = serde_json::from_str(json)?;
        Self::from_value(payload)
    }

    /// Build a network from an already-deserialized payload.
    ///
    /// Validates every record and cross-reference; the input payload
    /// is consumed, never decorated in place.
    pub fn from_value(payload: MapPayload) -> Result<Self, LoadError> {
        let raw_stations = payload.stations.ok_or(LoadError::MissingField("stations"))?;
        let raw_links = payload.links.ok_or(LoadError::MissingField("links"))?;

        let mut links = HashMap::with_capacity(raw_links.len());
        for (key, record) in &raw_links {
            let id = LinkId::parse(key).map_err(|source| LoadError::BadLinkId {
                token: key.clone(),
                source,
            })?;

            let kind = match record.link_type.as_str() {
                "link" => LinkKind::Line,
                "transfer" => LinkKind::Transfer,
                other => {
                    return Err(LoadError::UnknownLinkType {
                        link: id,
                        kind: other.to_string(),
                    });
                }
            };

            let link = Link {
                id: id.clone(),
                from: parse_station_id(&record.from_station_id)?,
                to: parse_station_id(&record.to_station_id)?,
                kind,
                weight_time: record.weight_time,
            };
            links.insert(id, link);
        }

        let mut stations = HashMap::with_capacity(raw_stations.len());
        for (key, record) in &raw_stations {
            let id = StationId::parse(key).map_err(|source| LoadError::BadStationId {
                token: key.clone(),
                source,
            })?;

            let link_ids = record
                .link_ids
                .iter()
                .map(parse_link_id)
                .collect::<Result<Vec<_>, _>>()?;

            let station = Station {
                id: id.clone(),
                name: record.name.clone(),
                line: LineId(record.line_id),
                is_transfer: record.is_transfer_station,
                link_ids,
            };
            stations.insert(id, station);
        }

        // Both directions of the station ↔ link cross-reference must hold.
        for station in stations.values() {
            for link_id in &station.link_ids {
                let link = links.get(link_id).ok_or_else(|| LoadError::DanglingLink {
                    station: station.id.clone(),
                    link: link_id.clone(),
                })?;
                if link.from != station.id && link.to != station.id {
                    return Err(LoadError::LinkEndpointMismatch {
                        station: station.id.clone(),
                        link: link_id.clone(),
                    });
                }
            }
        }

        for link in links.values() {
            for endpoint in [&link.from, &link.to] {
                let station =
                    stations
                        .get(endpoint)
                        .ok_or_else(|| LoadError::UnknownEndpoint {
                            link: link.id.clone(),
                            station: endpoint.clone(),
                        })?;
                if !station.link_ids.contains(&link.id) {
                    return Err(LoadError::MissingBackReference {
                        link: link.id.clone(),
                        station: endpoint.clone(),
                    });
                }
            }
        }

        let network = Network::from_parts(stations, links);
        debug!(
            stations = network.station_count(),
            links = network.link_count(),
            "metro map loaded"
        );

        Ok(network)
    }
}

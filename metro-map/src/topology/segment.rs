//! Maximal line-segment extraction.

use tracing::debug;

use crate::domain::{NetworkError, StationId};
use crate::network::{Link, LinkKind, Network};

/// A maximal run of consecutive same-line stations, bounded by
/// transfer, junction, or termination points (boundaries included).
///
/// `stations` reads end-to-end across the segment. `links` carries the
/// traversed links for aggregation; when a segment is assembled from
/// two directional walks the lists are concatenated per direction, not
/// re-ordered to match the stations.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub stations: Vec<StationId>,
    pub links: Vec<Link>,
}

impl LineSegment {
    /// Number of stations in the segment.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the segment contains no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Sum of the traversal costs of the segment's links.
    pub fn total_time(&self) -> f64 {
        self.links.iter().map(|l| l.weight_time).sum()
    }
}

impl Network {
    /// Walk from `seed_prev` through `seed_link` until a boundary.
    ///
    /// The returned run starts with `seed_prev` and the station
    /// reached via `seed_link`, and includes the boundary station that
    /// stopped the walk. If the line loops back, the walk stops the
    /// moment it would revisit `seed_prev`, so it always terminates.
    pub fn walk_until_boundary(
        &self,
        seed_prev: &StationId,
        seed_link: &Link,
    ) -> Result<LineSegment, NetworkError> {
        let first = seed_link
            .follow(seed_prev)
            .ok_or_else(|| NetworkError::LinkDoesNotTouch {
                link: seed_link.id.clone(),
                station: seed_prev.clone(),
            })?;

        let mut stations = vec![seed_prev.clone(), first.clone()];
        let mut links = vec![seed_link.clone()];

        let mut prev = seed_prev.clone();
        let mut current = seed_link.clone();

        loop {
            let Some(next_link) = self.next_in_line(&prev, &current)? else {
                break;
            };

            // next_in_line validated that `current` touches `prev`.
            let here = match current.follow(&prev) {
                Some(s) => s.clone(),
                None => break,
            };
            let next = next_link
                .follow(&here)
                .ok_or_else(|| NetworkError::LinkDoesNotTouch {
                    link: next_link.id.clone(),
                    station: here.clone(),
                })?
                .clone();

            // Cycle guard: never revisit the walk's own origin.
            if next == *seed_prev {
                break;
            }

            let next_link = next_link.clone();
            stations.push(next.clone());
            links.push(next_link.clone());
            prev = here;
            current = next_link;
        }

        Ok(LineSegment { stations, links })
    }

    /// The maximal uninterrupted line segment containing `id`.
    ///
    /// A transfer or junction station is its own single-element
    /// segment. For an interior station the walk runs outward along
    /// each of its one or two line links; with two runs, the second is
    /// reversed (duplicate anchor dropped) and prepended, so the
    /// result reads end-to-end with the anchor in its medial position.
    pub fn line_segment_from_station(&self, id: &StationId) -> Result<LineSegment, NetworkError> {
        let station = self.station(id)?;

        if station.is_transfer
            || self.is_junction_station(id)?
            || self.is_transfer_station(id)?
        {
            return Ok(LineSegment {
                stations: vec![id.clone()],
                links: Vec::new(),
            });
        }

        let line_links: Vec<Link> = self
            .neighbours(id, Some(LinkKind::Line))?
            .into_iter()
            .map(|n| n.link.clone())
            .collect();
        if !(1..=2).contains(&line_links.len()) {
            return Err(NetworkError::UnexpectedLineDegree {
                station: id.clone(),
                degree: line_links.len(),
            });
        }

        let forward = self.walk_until_boundary(id, &line_links[0])?;

        let segment = match line_links.get(1) {
            None => forward,
            Some(second_link) => {
                let backward = self.walk_until_boundary(id, second_link)?;

                let mut stations: Vec<StationId> =
                    backward.stations.into_iter().skip(1).collect();
                stations.reverse();
                stations.extend(forward.stations);

                let mut links = backward.links;
                links.extend(forward.links);

                LineSegment { stations, links }
            }
        };

        debug!(
            station = %id,
            stations = segment.len(),
            "line segment extracted"
        );

        Ok(segment)
    }
}

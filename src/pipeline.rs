//! Viewport + zoom in, standalone markers and cluster markers out.

use crate::cluster::{BoundingRect, ClusterSummary, GeoPoint, ParameterPolicy, db_scan_with};
use crate::error::{Error, Result};
use crate::index::{Entity, SpatialIndex};

/// Share of the viewport extent added on every side before querying
const VIEWPORT_MARGIN: f64 = 0.1;

/// One marker to draw on the map
#[derive(Debug, Clone, PartialEq)]
pub enum Marker<'a, P> {
    /// An entity that stands alone, with its original payload
    Station(&'a Entity<P>),
    Cluster(ClusterSummary),
}

impl<P> Marker<'_, P> {
    pub fn kind(&self) -> &'static str {
        match self {
            Marker::Station(_) => "station",
            Marker::Cluster(_) => "cluster",
        }
    }

    pub fn position(&self) -> GeoPoint {
        match self {
            Marker::Station(entity) => entity.point,
            Marker::Cluster(summary) => summary.centroid,
        }
    }
}

/// Clusters the contents of a shared index for one request at a time
pub struct Pipeline<'a, P> {
    index: &'a SpatialIndex<P>,
    policy: ParameterPolicy,
}

impl<'a, P> Pipeline<'a, P> {
    pub fn new(index: &'a SpatialIndex<P>) -> Self {
        Self::with_policy(index, ParameterPolicy::default())
    }

    pub fn with_policy(index: &'a SpatialIndex<P>, policy: ParameterPolicy) -> Self {
        Pipeline { index, policy }
    }

    /// Returns the markers for `viewport` (`"lat,lon|lat,lon"`) at `zoom`:
    /// standalone stations first, in index order, then clusters in the order
    /// they were discovered.
    pub fn handle(&self, viewport: &str, zoom: i32) -> Result<Vec<Marker<'a, P>>> {
        let region = parse_viewport(viewport)?;
        let entities = self.index.query_intersecting(&region)?;
        let points: Vec<GeoPoint> = entities.iter().map(|e| e.point).collect();

        let params = self.policy.select(zoom);
        let (clusters, noise) = db_scan_with(&points, &params);
        log::debug!(
            "zoom {zoom}: {} points in view, radius {:.4} km, min size {} -> {} clusters, {} standalone",
            points.len(),
            params.radius_km(),
            params.min_size,
            clusters.len(),
            noise.len()
        );

        let mut markers = Vec::with_capacity(noise.len() + clusters.len());
        markers.extend(noise.iter().map(|&i| Marker::Station(entities[i])));
        for cluster in &clusters {
            markers.push(Marker::Cluster(cluster.summarize(&points)?));
        }
        Ok(markers)
    }
}

/// Parses `"lat,lon|lat,lon"` (south-west then north-east corner) and pads
/// the rectangle by a tenth of its extent on every side.
pub fn parse_viewport(vp: &str) -> Result<BoundingRect> {
    let (sw, ne) = vp
        .split_once('|')
        .ok_or_else(|| Error::InputParse(format!("viewport {vp:?} has no '|' separator")))?;
    let sw = parse_corner(sw)?;
    let ne = parse_corner(ne)?;
    Ok(BoundingRect::new(sw, ne).inflate(VIEWPORT_MARGIN))
}

fn parse_corner(corner: &str) -> Result<GeoPoint> {
    let (lat, lon) = corner
        .split_once(',')
        .ok_or_else(|| Error::InputParse(format!("corner {corner:?} is not \"lat,lon\"")))?;
    Ok(GeoPoint::new(parse_coord(lon)?, parse_coord(lat)?))
}

fn parse_coord(s: &str) -> Result<f64> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|e| Error::InputParse(format!("coordinate {s:?}: {e}")))?;
    if !value.is_finite() {
        return Err(Error::InputParse(format!("coordinate {s:?} is not finite")));
    }
    Ok(value)
}

pub fn parse_zoom(s: &str) -> Result<i32> {
    s.trim()
        .parse()
        .map_err(|e| Error::InputParse(format!("zoom {s:?}: {e}")))
}

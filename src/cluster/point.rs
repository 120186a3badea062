//! Geographic points, rectangles and cluster summaries

use crate::error::{Error, Result};

/// GeoPoint represents a geographic coordinate (longitude, latitude)
///
/// The point is stored as [longitude, latitude] where:
/// - `[0]` is longitude, in `[-180, 180]`
/// - `[1]` is latitude, in `[-90, 90]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint(pub [f64; 2]);

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        GeoPoint([lon, lat])
    }

    pub fn lon(&self) -> f64 {
        self.0[0]
    }

    pub fn lat(&self) -> f64 {
        self.0[1]
    }

    /// Returns squared (without sqrt & normalization) distance between two points
    pub fn sq_dist(&self, b: &GeoPoint) -> f64 {
        super::distance::distance_spherical_fast(self, b)
    }

    /// Checks if this point is less than or equal to another point
    /// on both axes (a <= b)
    pub fn less_eq(&self, b: &GeoPoint) -> bool {
        self.0[0] <= b.0[0] && self.0[1] <= b.0[1]
    }

    /// Checks if this point is greater than or equal to another point
    /// on both axes (a >= b)
    pub fn greater_eq(&self, b: &GeoPoint) -> bool {
        self.0[0] >= b.0[0] && self.0[1] >= b.0[1]
    }
}

/// Axis-aligned rectangle over (longitude, latitude)
///
/// `min` is never greater than `max` on either axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRect {
    min: GeoPoint,
    max: GeoPoint,
}

impl BoundingRect {
    /// Builds the rectangle spanned by two opposite corners, in any order
    pub fn new(a: GeoPoint, b: GeoPoint) -> Self {
        BoundingRect {
            min: GeoPoint([a.0[0].min(b.0[0]), a.0[1].min(b.0[1])]),
            max: GeoPoint([a.0[0].max(b.0[0]), a.0[1].max(b.0[1])]),
        }
    }

    pub fn min(&self) -> GeoPoint {
        self.min
    }

    pub fn max(&self) -> GeoPoint {
        self.max
    }

    /// Extent along longitude
    pub fn width(&self) -> f64 {
        self.max.0[0] - self.min.0[0]
    }

    /// Extent along latitude
    pub fn height(&self) -> f64 {
        self.max.0[1] - self.min.0[1]
    }

    /// True if `p` lies inside the rectangle, edges included
    pub fn contains(&self, p: &GeoPoint) -> bool {
        p.greater_eq(&self.min) && p.less_eq(&self.max)
    }

    /// Grows the rectangle by `fraction` of its extent on every side
    pub fn inflate(&self, fraction: f64) -> Self {
        let dlon = self.width() * fraction;
        let dlat = self.height() * fraction;
        BoundingRect {
            min: GeoPoint([self.min.0[0] - dlon, self.min.0[1] - dlat]),
            max: GeoPoint([self.max.0[0] + dlon, self.max.0[1] + dlat]),
        }
    }
}

/// Checks if `inner` rectangle is inside `outer` rectangle
pub fn inside(inner: &BoundingRect, outer: &BoundingRect) -> bool {
    inner.min.greater_eq(&outer.min) && inner.max.less_eq(&outer.max)
}

/// Cluster represents a result of DBScan clustering work
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    /// Cluster ID, in order of discovery
    pub id: usize,
    /// Indices of points belonging to this cluster
    pub points: Vec<usize>,
}

/// Where a single input point ended up after clustering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Membership {
    Noise,
    Cluster(usize),
}

/// Centroid, extent and size of one cluster
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSummary {
    pub id: usize,
    pub centroid: GeoPoint,
    pub bounds: BoundingRect,
    pub count: usize,
}

impl Cluster {
    /// Calculates center and cluster bounds
    ///
    /// Returns `(center, bounds)` where `center` is the arithmetic mean of the
    /// members and `bounds` is their componentwise min/max.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyCluster`] if the cluster has no members
    pub fn centroid_and_bounds(&self, points: &[GeoPoint]) -> Result<(GeoPoint, BoundingRect)> {
        if self.points.is_empty() {
            log::error!("cluster #{} has no members", self.id);
            return Err(Error::EmptyCluster);
        }

        let mut min = GeoPoint([180.0, 90.0]);
        let mut max = GeoPoint([-180.0, -90.0]);
        let mut center = GeoPoint([0.0, 0.0]);

        for &i in &self.points {
            let pt = points[i];

            for j in 0..2 {
                center.0[j] += pt.0[j];

                if pt.0[j] < min.0[j] {
                    min.0[j] = pt.0[j];
                }
                if pt.0[j] > max.0[j] {
                    max.0[j] = pt.0[j];
                }
            }
        }

        // Summation rounding can push the mean a ulp past the extremes
        for j in 0..2 {
            center.0[j] = (center.0[j] / self.points.len() as f64).clamp(min.0[j], max.0[j]);
        }

        Ok((center, BoundingRect { min, max }))
    }

    pub fn summarize(&self, points: &[GeoPoint]) -> Result<ClusterSummary> {
        let (centroid, bounds) = self.centroid_and_bounds(points)?;
        Ok(ClusterSummary {
            id: self.id,
            centroid,
            bounds,
            count: self.points.len(),
        })
    }
}

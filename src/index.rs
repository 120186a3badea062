//! Read-mostly spatial index of point entities, backed by an R-tree.
//!
//! The index is filled once at startup and then only queried, so a shared
//! reference can be handed to any number of concurrent requests.

use crate::cluster::{BoundingRect, GeoPoint};
use crate::error::{Error, Result};
use rstar::{AABB, RTree, RTreeObject};

/// Half-size of the box each point occupies inside the tree
const POINT_EPSILON: f64 = 1e-6;

/// A point with an attached payload and a stable insertion id
#[derive(Debug, Clone, PartialEq)]
pub struct Entity<P> {
    pub id: usize,
    pub point: GeoPoint,
    pub payload: P,
}

impl<P> RTreeObject for Entity<P> {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        let [lon, lat] = self.point.0;
        AABB::from_corners(
            [lon - POINT_EPSILON, lat - POINT_EPSILON],
            [lon + POINT_EPSILON, lat + POINT_EPSILON],
        )
    }
}

pub struct SpatialIndex<P> {
    tree: RTree<Entity<P>>,
    next_id: usize,
}

impl<P> Default for SpatialIndex<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> SpatialIndex<P> {
    pub fn new() -> Self {
        SpatialIndex {
            tree: RTree::new(),
            next_id: 0,
        }
    }

    /// Builds an index from entities in order, ids following that order
    pub fn from_entities(entities: impl IntoIterator<Item = (GeoPoint, P)>) -> Self {
        let mut index = Self::new();
        for (point, payload) in entities {
            index.insert(point, payload);
        }
        index
    }

    /// Adds a point and returns the id it was given
    pub fn insert(&mut self, point: GeoPoint, payload: P) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.tree.insert(Entity { id, point, payload });
        id
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Returns every entity whose point lies within `rect`, edges included,
    /// ordered by id.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRegion`] if `rect` has no area, [`Error::IndexQuery`]
    /// if its corners are not finite
    pub fn query_intersecting(&self, rect: &BoundingRect) -> Result<Vec<&Entity<P>>> {
        if !rect.min().0.iter().chain(rect.max().0.iter()).all(|c| c.is_finite()) {
            log::warn!("Rejecting bounding box query with non-finite coordinates");
            return Err(Error::IndexQuery(format!("non-finite query rectangle {rect:?}")));
        }

        let (width, height) = (rect.width(), rect.height());
        if !(width > 0.0 && height > 0.0) {
            return Err(Error::InvalidRegion { width, height });
        }

        let envelope = AABB::from_corners(rect.min().0, rect.max().0);
        let mut found: Vec<&Entity<P>> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|e| rect.contains(&e.point))
            .collect();
        found.sort_unstable_by_key(|e| e.id);
        Ok(found)
    }
}

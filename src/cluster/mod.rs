//! DBScan clustering on (lon, lat) using K-D Tree
pub mod dbscan;
pub mod distance;
pub mod kdtree;
pub mod params;
pub mod point;

#[cfg(test)]
mod params_test;
#[cfg(test)]
mod point_test;

pub use dbscan::{db_scan, db_scan_with, labels, region_query};
pub use distance::{
    DEGREE_RAD, EARTH_R, distance_spherical, distance_spherical_fast, fast_cos, fast_sine,
    km_to_surrogate, surrogate_to_km,
};
pub use kdtree::{KDTree, new_kd_tree};
pub use params::{ClusterParameters, ParameterPolicy, ground_resolution, select_parameters};
pub use point::{BoundingRect, Cluster, ClusterSummary, GeoPoint, Membership, inside};

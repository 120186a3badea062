//! Zoom level to clustering parameters

use super::distance::{km_to_surrogate, surrogate_to_km};
use std::f64::consts::PI;

/// Equatorial Earth radius in kilometers, as used by the web map tile pyramid
pub const EQUATORIAL_R: f64 = 6378.137;

/// Radius and density threshold for one clustering run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterParameters {
    /// Neighbourhood radius on the squared surrogate scale
    pub radius: f64,
    /// Minimum neighbourhood size, at least 1
    pub min_size: usize,
}

impl ClusterParameters {
    pub fn from_km(radius_km: f64, min_size: usize) -> Self {
        ClusterParameters {
            radius: km_to_surrogate(radius_km),
            min_size: min_size.max(1),
        }
    }

    pub fn radius_km(&self) -> f64 {
        surrogate_to_km(self.radius)
    }
}

/// Constants behind the zoom to parameter mapping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterPolicy {
    /// From this zoom on markers rarely overlap and a fixed radius is used
    pub min_zoom_stop_cluster: i32,
    /// Latitude at which ground resolution is evaluated, in degrees
    pub reference_lat: f64,
    /// On-screen marker width in pixels
    pub marker_width: f64,
    /// Radius used at and above `min_zoom_stop_cluster`, in kilometers
    pub fixed_radius_km: f64,
}

impl Default for ParameterPolicy {
    fn default() -> Self {
        ParameterPolicy {
            min_zoom_stop_cluster: 14,
            reference_lat: 40.7305,
            marker_width: 40.0,
            fixed_radius_km: 0.01,
        }
    }
}

impl ParameterPolicy {
    pub fn select(&self, zoom: i32) -> ClusterParameters {
        if zoom >= self.min_zoom_stop_cluster {
            return ClusterParameters::from_km(self.fixed_radius_km, 2);
        }
        let radius_km = ground_resolution(self.reference_lat, zoom) * self.marker_width;
        ClusterParameters::from_km(radius_km, 3)
    }
}

/// Selects clustering parameters for `zoom` with the default policy
pub fn select_parameters(zoom: i32) -> ClusterParameters {
    ParameterPolicy::default().select(zoom)
}

/// Kilometers covered by one pixel at latitude `lat` (degrees) and `zoom`
///
/// See <https://wiki.openstreetmap.org/wiki/Zoom_levels>
pub fn ground_resolution(lat: f64, zoom: i32) -> f64 {
    let num_pixels = 2f64.powi(8 + zoom);
    lat.to_radians().cos() * 2.0 * PI * EQUATORIAL_R / num_pixels
}

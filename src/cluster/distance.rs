use std::f64::consts::PI;

/// Coefficient to translate from degrees to radians
pub const DEGREE_RAD: f64 = PI / 180.0;

/// Mean Earth radius in kilometers
pub const EARTH_R: f64 = 6371.0;

use super::point::GeoPoint;

/// Calculates spherical (equirectangular) distance between two points
/// with the exact cosine
///
/// # Returns
///
/// Distance in kilometers
pub fn distance_spherical(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let v1 = (p1.0[1] - p2.0[1]) * DEGREE_RAD;
    let v1 = v1 * v1;

    let v2 = (p1.0[0] - p2.0[0]) * DEGREE_RAD * ((p1.0[1] + p2.0[1]) / 2.0 * DEGREE_RAD).cos();
    let v2 = v2 * v2;

    EARTH_R * (v1 + v2).sqrt()
}

/// Calculates sine approximated to parabola
///
/// Taken from: <http://forum.devmaster.net/t/fast-and-accurate-sine-cosine/9648>
///
/// # Panics
///
/// Panics if `x` is outside the range `[-PI, PI]`
pub fn fast_sine(x: f64) -> f64 {
    const B: f64 = 4.0 / PI;
    const C: f64 = -4.0 / (PI * PI);
    const P: f64 = 0.225;

    assert!((-PI..=PI).contains(&x), "fast_sine argument {x} out of range");

    let y = B * x + C * x * x.abs();
    P * (y * y.abs() - y) + y
}

/// Calculates cosine from sine
pub fn fast_cos(x: f64) -> f64 {
    let mut x = x + PI / 2.0;
    if x > PI {
        x -= 2.0 * PI;
    }

    fast_sine(x)
}

/// Calculates spherical distance with fast cosine
/// without sqrt and normalization to Earth radius/radians
///
/// The result is only good for comparing against a threshold produced by
/// [`km_to_surrogate`]; to get real distance use [`surrogate_to_km`].
pub fn distance_spherical_fast(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let v1 = p1.0[1] - p2.0[1];
    let v2 = (p1.0[0] - p2.0[0]) * fast_cos((p1.0[1] + p2.0[1]) / 2.0 * DEGREE_RAD);

    v1 * v1 + v2 * v2
}

/// Converts a distance in kilometers to the squared surrogate scale
pub fn km_to_surrogate(km: f64) -> f64 {
    let eps = km / EARTH_R / DEGREE_RAD;
    eps * eps
}

/// Converts a squared surrogate distance back to kilometers
pub fn surrogate_to_km(surrogate: f64) -> f64 {
    surrogate.sqrt() * EARTH_R * DEGREE_RAD
}

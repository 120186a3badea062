#[cfg(test)]
mod tests {
    use crate::cluster::{ClusterParameters, ParameterPolicy, ground_resolution, km_to_surrogate, select_parameters};

    #[test]
    fn test_close_zoom_uses_fixed_radius() {
        for zoom in [14, 15, 18, 22] {
            let params = select_parameters(zoom);
            assert_eq!(params.min_size, 2);
            assert_eq!(params.radius, km_to_surrogate(0.01));
        }
    }

    #[test]
    fn test_city_zoom_is_wider_than_fixed() {
        let fixed = select_parameters(14);
        let city = select_parameters(10);
        assert_eq!(city.min_size, 3);
        assert!(city.radius > fixed.radius);
        // About 4.6 km of ground under a 40px marker at NYC latitude
        assert!((city.radius_km() - 4.634).abs() < 0.001, "{}", city.radius_km());
    }

    #[test]
    fn test_radius_shrinks_with_zoom() {
        for zoom in 0..13 {
            assert!(select_parameters(zoom).radius > select_parameters(zoom + 1).radius);
        }
    }

    #[test]
    fn test_ground_resolution_at_equator() {
        // Standard tile pyramid value for zoom 0
        assert!((ground_resolution(0.0, 0) - 156.543).abs() < 0.001);
        assert!((ground_resolution(0.0, 1) * 2.0 - ground_resolution(0.0, 0)).abs() < 1e-9);
    }

    #[test]
    fn test_custom_policy() {
        let policy = ParameterPolicy {
            min_zoom_stop_cluster: 12,
            fixed_radius_km: 0.5,
            ..ParameterPolicy::default()
        };
        assert_eq!(policy.select(12), ClusterParameters::from_km(0.5, 2));
        assert_eq!(policy.select(11).min_size, 3);
    }

    #[test]
    fn test_min_size_at_least_one() {
        assert_eq!(ClusterParameters::from_km(1.0, 0).min_size, 1);
    }
}

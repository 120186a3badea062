#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::error::Error;

    #[test]
    fn test_centroid_and_bounds() {
        let points = vec![
            GeoPoint([30.244759, 59.955982]),
            GeoPoint([30.24472, 59.955975]),
            GeoPoint([30.244358, 59.96698]),
        ];
        let c1 = Cluster {
            id: 0,
            points: vec![0, 1, 2],
        };

        let (center, bounds) = c1.centroid_and_bounds(&points).unwrap();
        assert_eq!(center.0[0], 30.244612333333333);
        assert_eq!(center.0[1], 59.95964566666667);
        assert_eq!(bounds.min().0[0], 30.244358);
        assert_eq!(bounds.min().0[1], 59.955975);
        assert_eq!(bounds.max().0[0], 30.244759);
        assert_eq!(bounds.max().0[1], 59.96698);
        assert!(bounds.contains(&center));
    }

    #[test]
    fn test_centroid_of_repeated_point_stays_in_bounds() {
        let points = vec![GeoPoint([0.1, 0.1]); 3];
        let c = Cluster {
            id: 0,
            points: vec![0, 1, 2],
        };
        let (center, bounds) = c.centroid_and_bounds(&points).unwrap();
        assert!(bounds.contains(&center));
        assert_eq!(center, GeoPoint([0.1, 0.1]));
    }

    #[test]
    fn test_summarize_subset() {
        let points = vec![
            GeoPoint::new(-74.0, 40.7),
            GeoPoint::new(10.0, 10.0),
            GeoPoint::new(-73.0, 41.7),
        ];
        let c = Cluster {
            id: 4,
            points: vec![0, 2],
        };
        let summary = c.summarize(&points).unwrap();
        assert_eq!(summary.id, 4);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.centroid, GeoPoint::new(-73.5, 41.2));
        assert_eq!(summary.bounds.min(), GeoPoint::new(-74.0, 40.7));
        assert_eq!(summary.bounds.max(), GeoPoint::new(-73.0, 41.7));
    }

    #[test]
    fn test_empty_cluster() {
        let c = Cluster {
            id: 0,
            points: vec![],
        };
        assert!(matches!(
            c.centroid_and_bounds(&[GeoPoint::new(1.0, 1.0)]),
            Err(Error::EmptyCluster)
        ));
    }

    #[test]
    fn test_rect_orders_corners() {
        let r = BoundingRect::new(GeoPoint::new(5.0, -1.0), GeoPoint::new(-3.0, 2.0));
        assert_eq!(r.min(), GeoPoint::new(-3.0, -1.0));
        assert_eq!(r.max(), GeoPoint::new(5.0, 2.0));
        assert_eq!(r.width(), 8.0);
        assert_eq!(r.height(), 3.0);
    }

    #[test]
    fn test_inflate() {
        let r = BoundingRect::new(GeoPoint::new(0.0, 0.0), GeoPoint::new(10.0, 20.0)).inflate(0.1);
        assert_eq!(r.min(), GeoPoint::new(-1.0, -2.0));
        assert_eq!(r.max(), GeoPoint::new(11.0, 22.0));
    }

    #[test]
    fn test_inside() {
        let outer = BoundingRect::new(GeoPoint::new(-10.0, -10.0), GeoPoint::new(10.0, 10.0));
        let inner = BoundingRect::new(GeoPoint::new(-1.0, -1.0), GeoPoint::new(1.0, 1.0));
        let poking_out = BoundingRect::new(GeoPoint::new(-1.0, -1.0), GeoPoint::new(10.5, 1.0));

        assert!(inside(&outer, &outer));
        assert!(inside(&inner, &inner));
        assert!(inside(&inner, &outer));
        assert!(!inside(&outer, &inner));
        assert!(!inside(&poking_out, &outer));
    }
}

#[cfg(test)]
mod tests {
    use crate::{Args, render};
    use clap::Parser;
    use station_cluster::Error;
    use station_cluster::stations::read_csv;

    const TEST_CSV: &str = "latitude,longitude,name,notes
40.7128,-74.0060,City Hall,4 5 6
40.7130,-74.0062,Brooklyn Bridge,4 5 6
40.7132,-74.0064,Chambers St,J Z
40.7500,-73.9900,Herald Sq,B D F M
40.7502,-73.9902,34 St Penn,1 2 3
40.7504,-73.9904,Times Sq,N Q R W
40.8000,-73.9500,125 St,A B C D
41.0000,-74.0000,Far Away,none";

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["station_cluster", "--viewport", "40.70,-74.02|40.80,-73.94"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).expect("arguments should parse")
    }

    fn features(json: &str) -> Vec<serde_json::Value> {
        let value: serde_json::Value = serde_json::from_str(json).unwrap();
        value["features"].as_array().unwrap().clone()
    }

    #[test]
    fn test_main_program() {
        let index = read_csv(TEST_CSV.as_bytes()).expect("Failed to read CSV");
        assert_eq!(index.len(), 8);

        // Far Away is outside the viewport; 125 St stands alone
        let json = render(&index, &args(&["--zoom", "12"])).unwrap();
        let features = features(&json);
        let kinds: Vec<_> = features
            .iter()
            .map(|f| f["properties"]["type"].as_str().unwrap())
            .collect();
        assert_eq!(kinds, vec!["station", "cluster", "cluster"]);
        assert_eq!(features[0]["properties"]["title"], "125 St Station");
        assert_eq!(features[1]["properties"]["description"], "Contains 3 stations");
        assert_eq!(features[2]["properties"]["title"], "Cluster #2");
    }

    #[test]
    fn test_street_zoom_keeps_stations() {
        let index = read_csv(TEST_CSV.as_bytes()).unwrap();
        let json = render(&index, &args(&["--zoom", "17"])).unwrap();
        assert_eq!(features(&json).len(), 7);
    }

    #[test]
    fn test_policy_flags() {
        let index = read_csv(TEST_CSV.as_bytes()).unwrap();
        let json = render(
            &index,
            &args(&["--zoom", "17", "--min-zoom-stop-cluster", "18", "--marker-width", "400"]),
        )
        .unwrap();
        // A wider marker merges the Downtown and Midtown triples again
        assert!(features(&json).len() < 7);
    }

    #[test]
    fn test_bad_zoom() {
        let index = read_csv(TEST_CSV.as_bytes()).unwrap();
        let err = render(&index, &args(&["--zoom", "close"])).unwrap_err();
        assert!(matches!(err, Error::InputParse(_)));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_negative_viewport_parses() {
        let args = Args::try_parse_from([
            "station_cluster",
            "--viewport",
            "-33.90,151.18|-33.85,151.25",
            "--zoom",
            "12",
            "--reference-lat",
            "-33.87",
        ])
        .unwrap();
        assert_eq!(args.viewport, "-33.90,151.18|-33.85,151.25");
        assert_eq!(args.policy().reference_lat, -33.87);
    }
}

//! Station datasets in, GeoJSON feature collections out.
//!
//! A station is a GeoJSON point feature whose `name` and `notes` properties are
//! shown on the map. Datasets are read once at startup into a [`SpatialIndex`].

use crate::cluster::{ClusterSummary, GeoPoint};
use crate::error::{Error, Result};
use crate::index::{Entity, SpatialIndex};
use crate::pipeline::Marker;
use csv::ReaderBuilder;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub type StationIndex = SpatialIndex<Feature>;

/// Loads a dataset, choosing the format by file extension
/// (`.csv` for CSV, anything else is read as GeoJSON)
pub fn load_stations(path: &Path) -> Result<StationIndex> {
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let index = if is_csv {
        read_csv(File::open(path)?)?
    } else {
        parse_geojson(&std::fs::read_to_string(path)?)?
    };
    log::info!("Loaded {} stations from {:?}", index.len(), path);
    Ok(index)
}

/// Builds an index from a GeoJSON FeatureCollection of point features
///
/// Features without a usable point geometry are skipped.
pub fn parse_geojson(text: &str) -> Result<StationIndex> {
    let collection = match text.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(fc) => fc,
        _ => return Err(Error::Dataset("expected a FeatureCollection".to_string())),
    };

    let mut index = SpatialIndex::new();
    for (n, feature) in collection.features.into_iter().enumerate() {
        match feature_point(&feature) {
            Some(point) => {
                index.insert(point, feature);
            }
            None => log::warn!("Skipping feature #{n}: not a point within lon/lat range"),
        }
    }
    Ok(index)
}

fn feature_point(feature: &Feature) -> Option<GeoPoint> {
    match &feature.geometry.as_ref()?.value {
        Value::Point(coords) if coords.len() >= 2 => checked_point(coords[0], coords[1]),
        _ => None,
    }
}

fn checked_point(lon: f64, lat: f64) -> Option<GeoPoint> {
    ((-180.0..=180.0).contains(&lon) && (-90.0..=90.0).contains(&lat))
        .then(|| GeoPoint::new(lon, lat))
}

/// Builds an index from CSV rows of `latitude,longitude[,name[,notes]]`
///
/// A header row is optional; rows with bad coordinates are skipped.
pub fn read_csv(reader: impl Read) -> Result<StationIndex> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut index = SpatialIndex::new();
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let lat = record.get(0).and_then(|s| s.trim().parse::<f64>().ok());
        let lon = record.get(1).and_then(|s| s.trim().parse::<f64>().ok());

        let point = match (lon, lat) {
            (Some(lon), Some(lat)) => checked_point(lon, lat),
            // First row that doesn't parse is a header
            _ if row == 0 => continue,
            _ => None,
        };
        let Some(point) = point else {
            log::warn!("Skipping CSV row {}: bad coordinates", row + 1);
            continue;
        };

        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), record.get(2).unwrap_or("").into());
        properties.insert("notes".to_string(), record.get(3).unwrap_or("").into());
        let feature = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(vec![point.lon(), point.lat()]))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        };
        index.insert(point, feature);
    }
    Ok(index)
}

/// Renders markers as the feature collection map clients draw
pub fn to_feature_collection(markers: &[Marker<'_, Feature>]) -> Result<FeatureCollection> {
    let features = markers
        .iter()
        .map(|marker| match marker {
            Marker::Station(entity) => station_feature(entity),
            Marker::Cluster(summary) => Ok(cluster_feature(summary)),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn station_feature(entity: &Entity<Feature>) -> Result<Feature> {
    let mut feature = entity.payload.clone();
    let name = string_property(entity, "name")?;
    let notes = string_property(entity, "notes")?;
    feature.set_property("title", format!("{name} Station"));
    feature.set_property("description", notes);
    feature.set_property("type", "station");
    Ok(feature)
}

fn string_property(entity: &Entity<Feature>, key: &str) -> Result<String> {
    entity
        .payload
        .property(key)
        .and_then(|value| value.as_str())
        .map(str::to_owned)
        .ok_or_else(|| {
            Error::Clustering(format!("station #{} has no string property {key:?}", entity.id))
        })
}

fn cluster_feature(summary: &ClusterSummary) -> Feature {
    let (min, max) = (summary.bounds.min(), summary.bounds.max());
    let mut feature = Feature::from(Geometry::new(Value::Point(vec![
        summary.centroid.lon(),
        summary.centroid.lat(),
    ])));
    feature.bbox = Some(vec![min.lon(), min.lat(), max.lon(), max.lat()]);
    feature.set_property("title", format!("Cluster #{}", summary.id + 1));
    feature.set_property("description", format!("Contains {} stations", summary.count));
    feature.set_property("type", "cluster");
    feature
}

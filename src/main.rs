//! Station clustering tool
//!
//! Loads a station dataset, clusters the stations visible in a viewport at a
//! given zoom level, and prints the markers as a GeoJSON feature collection.

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

use station_cluster::cluster::ParameterPolicy;
use station_cluster::stations::{StationIndex, load_stations, to_feature_collection};
use station_cluster::{Pipeline, Result, parse_zoom};

#[cfg(test)]
mod main_test;

#[derive(Parser)]
#[command(name = "station_cluster")]
#[command(about = "Zoom-adaptive clustering of map stations", long_about = None)]
struct Args {
    /// Station dataset: GeoJSON FeatureCollection, or CSV with latitude,longitude,name,notes
    #[arg(short, long, default_value = "subway-stations.geojson")]
    data: PathBuf,

    /// Visible map area as "lat,lon|lat,lon" (south-west, north-east)
    #[arg(long, allow_hyphen_values = true)]
    viewport: String,

    /// Map zoom level
    #[arg(short, long)]
    zoom: String,

    /// Output file for the feature collection (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Zoom level from which stations are only merged when nearly on top of each other
    #[arg(long, default_value_t = 14)]
    min_zoom_stop_cluster: i32,

    /// Latitude (degrees) used to turn pixels into ground distance
    #[arg(long, default_value_t = 40.7305, allow_negative_numbers = true)]
    reference_lat: f64,

    /// Width of a station marker in pixels
    #[arg(long, default_value_t = 40.0)]
    marker_width: f64,

    /// Clustering radius in km at and above --min-zoom-stop-cluster
    #[arg(long, default_value_t = 0.01)]
    fixed_radius_km: f64,

    /// Enable debug output
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn policy(&self) -> ParameterPolicy {
        ParameterPolicy {
            min_zoom_stop_cluster: self.min_zoom_stop_cluster,
            reference_lat: self.reference_lat,
            marker_width: self.marker_width,
            fixed_radius_km: self.fixed_radius_km,
        }
    }
}

fn main() {
    let args = Args::parse();

    let crate_level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .with_module_level("station_cluster", crate_level)
        .init()
    {
        eprintln!("Error setting up logging: {}", e);
    }

    let index = match load_stations(&args.data) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("Error loading stations: {}", e);
            std::process::exit(1);
        }
    };

    let json = match render(&index, &args) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(if e.is_client_error() { 2 } else { 1 });
        }
    };

    match args.output {
        None => println!("{}", json),
        Some(output_file) => {
            if let Err(e) = std::fs::write(&output_file, json) {
                eprintln!("Error writing {:?}: {}", output_file, e);
                std::process::exit(1);
            }
            log::debug!("Feature collection written to {:?}", output_file);
        }
    }
}

/// Handles one viewport/zoom request against a loaded index
fn render(index: &StationIndex, args: &Args) -> Result<String> {
    let zoom = parse_zoom(&args.zoom)?;
    let markers = Pipeline::with_policy(index, args.policy()).handle(&args.viewport, zoom)?;
    let collection = to_feature_collection(&markers)?;
    Ok(serde_json::to_string(&collection)?)
}

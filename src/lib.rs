//! Decides which map markers to show for a viewport and zoom level, and which
//! to merge into cluster markers.
//!
//! ```no_run
//! use station_cluster::{Pipeline, stations};
//!
//! let index = stations::load_stations("subway-stations.geojson".as_ref())?;
//! let markers = Pipeline::new(&index).handle("40.70,-74.01|40.75,-73.95", 12)?;
//! let collection = stations::to_feature_collection(&markers)?;
//! println!("{}", serde_json::to_string(&collection)?);
//! # Ok::<(), station_cluster::Error>(())
//! ```

pub mod cluster;
pub mod error;
pub mod index;
pub mod pipeline;
pub mod stations;


pub use error::{Error, Result};
pub use index::{Entity, SpatialIndex};
pub use pipeline::{Marker, Pipeline, parse_viewport, parse_zoom};

//! Error type shared by the clustering core and its adapters

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed viewport or zoom string
    #[error("couldn't parse input: {0}")]
    InputParse(String),

    /// Query rectangle with no area
    #[error("invalid query region: width {width}, height {height}")]
    InvalidRegion { width: f64, height: f64 },

    #[error("spatial index query failed: {0}")]
    IndexQuery(String),

    /// Entity payload is missing something the output needs
    #[error("couldn't cluster results: {0}")]
    Clustering(String),

    #[error("cluster has no members")]
    EmptyCluster,

    #[error("invalid dataset: {0}")]
    Dataset(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    GeoJson(#[from] geojson::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// True when the caller sent bad input, false for faults on our side
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::InputParse(_) | Error::InvalidRegion { .. })
    }
}

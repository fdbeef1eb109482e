//! Tile index: a GeoJSON-like feature collection used purely as a list
//! of tile filenames.
//!
//! Validation is strict and happens entirely before any network access:
//! the document must be a `FeatureCollection`, every feature a `Feature`
//! with a single-ring `Polygon` geometry and a `dataFile` property. The
//! ring's coordinate values are checked for shape but not retained.

mod parse;

use std::fs;
use std::path::Path;

use parse::RawIndex;

/// Why an index document was rejected.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("failed to read index {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("index is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("index document type is {0:?}, expected \"FeatureCollection\"")]
    NotFeatureCollection(String),
    #[error("feature {index}: {reason}")]
    BadFeature { index: usize, reason: String },
}

/// A validated tile index. Every feature has passed the shape checks and
/// carries a `dataFile` name.
#[derive(Debug)]
pub struct TileIndex {
    files: Vec<String>,
}

impl TileIndex {
    /// Loads and validates an index document from disk.
    pub fn load(path: &Path) -> Result<Self, IndexError> {
        let data = fs::read_to_string(path).map_err(|source| IndexError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&data)
    }

    /// Parses and validates an index document.
    pub fn from_json(data: &str) -> Result<Self, IndexError> {
        let raw: RawIndex = serde_json::from_str(data)?;
        if raw.kind != "FeatureCollection" {
            return Err(IndexError::NotFeatureCollection(raw.kind));
        }

        let mut files = Vec::with_capacity(raw.features.len());
        for (index, feature) in raw.features.iter().enumerate() {
            let bad = |reason: String| IndexError::BadFeature { index, reason };
            if feature.kind != "Feature" {
                return Err(bad(format!(
                    "type is {:?}, expected \"Feature\"",
                    feature.kind
                )));
            }
            if feature.geometry.kind != "Polygon" {
                return Err(bad(format!(
                    "geometry type is {:?}, expected \"Polygon\"",
                    feature.geometry.kind
                )));
            }
            if feature.geometry.coordinates.len() != 1 {
                return Err(bad(format!(
                    "expected a single coordinate ring, found {}",
                    feature.geometry.coordinates.len()
                )));
            }
            let Some(name) = feature.properties.data_file.as_deref() else {
                return Err(bad("missing dataFile property".to_string()));
            };
            files.push(name.to_string());
        }

        tracing::debug!(tiles = files.len(), "tile index validated");
        Ok(TileIndex { files })
    }

    /// Number of tiles in the index.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Tile filenames in document order.
    pub fn data_files(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }
}

//! Minimal GeoJSON structures for the tile index document.
//!
//! Only the fields the validator looks at are modeled; everything else
//! in the document is ignored.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct RawIndex {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawFeature {
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: RawGeometry,
    pub properties: RawProperties,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawProperties {
    #[serde(rename = "dataFile")]
    pub data_file: Option<String>,
}

use crate::geo::Coordinate;
use serde::{Deserialize, Serialize};

/// A landmark players have to find on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub coordinates: Coordinate,
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub hint: String,
    #[serde(default)]
    pub image_url: String,
}

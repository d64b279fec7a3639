use serde::{Deserialize, Serialize};

use crate::tile::Tile;

/// URL templates for the two raster services. Placeholders: `{z}`, `{x}`,
/// `{y}` and `{token}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileEndpoints {
    #[serde(default = "default_elevation")]
    pub elevation: String,
    #[serde(default = "default_satellite")]
    pub satellite: String,
}

fn default_elevation() -> String {
    "https://api.mapbox.com/v4/mapbox.terrain-rgb/{z}/{x}/{y}.pngraw?access_token={token}".into()
}

fn default_satellite() -> String {
    "https://api.mapbox.com/v4/mapbox.satellite/{z}/{x}/{y}@2x.png?access_token={token}".into()
}

impl Default for TileEndpoints {
    fn default() -> Self {
        Self {
            elevation: default_elevation(),
            satellite: default_satellite(),
        }
    }
}

impl TileEndpoints {
    pub fn elevation_url(&self, tile: Tile, token: &str) -> String {
        expand(&self.elevation, tile, token)
    }

    pub fn satellite_url(&self, tile: Tile, token: &str) -> String {
        expand(&self.satellite, tile, token)
    }
}

fn expand(template: &str, tile: Tile, token: &str) -> String {
    template
        .replace("{z}", &tile.zoom.to_string())
        .replace("{x}", &tile.x.to_string())
        .replace("{y}", &tile.y.to_string())
        .replace("{token}", token)
}

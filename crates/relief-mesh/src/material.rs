use relief_raster::Texture;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Material {
    /// Shiny surface colored by a satellite texture.
    Textured {
        map: Texture,
        shininess: f32,
        double_sided: bool,
    },
    /// Flat grey used for skirts.
    Standard {
        color: u32,
        roughness: f32,
        metalness: f32,
        double_sided: bool,
    },
}

impl Material {
    pub fn surface(map: Texture) -> Self {
        Material::Textured {
            map,
            shininess: 0.8,
            double_sided: true,
        }
    }

    pub fn skirt() -> Self {
        Material::Standard {
            color: 0xaaaaaa,
            roughness: 0.6,
            metalness: 0.2,
            double_sided: true,
        }
    }

    pub fn texture(&self) -> Option<&Texture> {
        match self {
            Material::Textured { map, .. } => Some(map),
            Material::Standard { .. } => None,
        }
    }
}

//! CPU terrain meshing: displaced tile surfaces, edge skirts and the 2x2
//! terrain group.
#![forbid(unsafe_code)]

mod assemble;
mod edge;
mod material;
mod mesh_build;
mod scene;
mod skirt;
mod surface;

pub use assemble::{assemble, tile_offset};
pub use edge::Edge;
pub use material::Material;
pub use mesh_build::MeshBuild;
pub use scene::{NodeKind, SceneNode};
pub use skirt::{SKIRT_HEIGHT, attach_skirts, build_skirt, edge_samples};
pub use surface::{HEIGHT_RANGE, build_surface, displace};

use relief_raster::{ElevationGrid, ElevationRange, Texture};
use relief_tiles::Tile;

/// Surface plus its four skirts for one tile.
pub fn build_tile(
    tile: Tile,
    grid: &ElevationGrid,
    range: ElevationRange,
    texture: Texture,
) -> SceneNode {
    let mut surface = build_surface(tile, grid, range, texture);
    attach_skirts(&mut surface, grid, range);
    surface
}

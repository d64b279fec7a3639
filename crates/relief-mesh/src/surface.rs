use relief_geom::Transform;
use relief_raster::{ElevationGrid, ElevationRange, Texture};
use relief_tiles::Tile;

use crate::material::Material;
use crate::mesh_build::MeshBuild;
use crate::scene::{NodeKind, SceneNode};

/// Output height span that `[min, max]` elevations are mapped onto.
pub const HEIGHT_RANGE: f32 = 200.0;

#[inline]
pub fn displace(value: f32, range: ElevationRange) -> f32 {
    range.normalize(value, HEIGHT_RANGE)
}

/// Displaced, textured grid for one tile. The plane is built in XY with
/// heights on Z, then turned -90 degrees about X so heights point up (+Y).
pub fn build_surface(
    tile: Tile,
    grid: &ElevationGrid,
    range: ElevationRange,
    texture: Texture,
) -> SceneNode {
    let n = grid.size();
    let size = n as f32;
    let mut mesh = MeshBuild::plane(size, size, n - 1, n - 1);
    debug_assert_eq!(mesh.vertex_count(), grid.samples().len());
    for (i, &e) in grid.samples().iter().enumerate() {
        mesh.set_z(i, displace(e, range));
    }
    mesh.compute_normals();
    mesh.compute_bounds();
    log::debug!(
        "surface {}: {} vertices, bounding radius {:.1}",
        tile,
        mesh.vertex_count(),
        mesh.bounds.radius
    );

    SceneNode {
        name: format!("tile {tile}"),
        transform: Transform::IDENTITY.with_rotation_deg(-90.0, 0.0, 0.0),
        cast_shadow: true,
        kind: NodeKind::Surface {
            mesh,
            material: Material::surface(texture),
        },
        children: Vec::new(),
    }
}

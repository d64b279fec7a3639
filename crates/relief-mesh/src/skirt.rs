use relief_geom::{Transform, Vec3};
use relief_raster::{ElevationGrid, ElevationRange};

use crate::edge::Edge;
use crate::material::Material;
use crate::mesh_build::MeshBuild;
use crate::scene::{NodeKind, SceneNode};
use crate::surface::displace;

/// Height of a skirt strip before its upper row follows the terrain.
pub const SKIRT_HEIGHT: f32 = 20.0;

/// Boundary elevations along `edge`, in the order the strip's columns run.
pub fn edge_samples(grid: &ElevationGrid, edge: Edge) -> Vec<f32> {
    let last = grid.size() - 1;
    match edge {
        Edge::Top => grid.row(0).to_vec(),
        Edge::Bottom => grid.row(last).to_vec(),
        Edge::Right => grid.column(last).collect(),
        Edge::Left => grid.column(0).collect(),
    }
}

/// Position and orientation of a strip in its surface's local frame.
fn placement(edge: Edge, size: f32) -> Transform {
    let half = size / 2.0;
    let (offset, ry) = match edge {
        Edge::Top => (Vec3::new(0.0, half, 0.0), 0.0),
        Edge::Bottom => (Vec3::new(0.0, -half, 0.0), 0.0),
        Edge::Right => (Vec3::new(half, 0.0, 0.0), -90.0),
        Edge::Left => (Vec3::new(-half, 0.0, 0.0), -90.0),
    };
    Transform::from_translation(offset).with_rotation_deg(90.0, ry, 0.0)
}

/// Vertical strip whose upper row follows the displaced terrain along `edge`
/// and whose lower row stays at `-SKIRT_HEIGHT / 2`.
pub fn build_skirt(grid: &ElevationGrid, range: ElevationRange, edge: Edge) -> SceneNode {
    let n = grid.size();
    let mut mesh = MeshBuild::plane(n as f32, SKIRT_HEIGHT, n - 1, 1);
    // row 0 of the strip is its upper row (y = SKIRT_HEIGHT / 2)
    for (i, e) in edge_samples(grid, edge).into_iter().enumerate() {
        mesh.set_y(i, displace(e, range));
    }
    mesh.compute_normals();
    mesh.compute_bounds();

    SceneNode {
        name: format!("skirt {}", edge.name()),
        transform: placement(edge, n as f32),
        cast_shadow: true,
        kind: NodeKind::Skirt {
            edge,
            mesh,
            material: Material::skirt(),
        },
        children: Vec::new(),
    }
}

/// Adds the four skirts as children of `surface`.
pub fn attach_skirts(surface: &mut SceneNode, grid: &ElevationGrid, range: ElevationRange) {
    for edge in Edge::ALL {
        surface.add(build_skirt(grid, range, edge));
    }
}

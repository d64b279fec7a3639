use relief_geom::Vec3;
use relief_tiles::BLOCK_LEN;

use crate::scene::SceneNode;

/// Grid offset `(x, z)` of block tile `i`: 0 at the origin, 1 east,
/// 2 south-east, 3 south.
#[inline]
pub fn tile_offset(i: usize, tile_size: usize) -> (f32, f32) {
    let s = tile_size as f32;
    let x = if i == 1 || i == 2 { s } else { 0.0 };
    let z = if i == 2 || i == 3 { s } else { 0.0 };
    (x, z)
}

/// Lays out the block's tiles on a `tile_size` grid, groups them and shifts
/// the group so its bounding-box center is at the origin horizontally. The
/// group is never moved vertically.
pub fn assemble(tiles: Vec<SceneNode>, tile_size: usize, scale: Vec3) -> SceneNode {
    debug_assert_eq!(tiles.len(), BLOCK_LEN);
    let mut group = SceneNode::group("terrain");
    group.transform.scale = scale;
    for (i, mut tile) in tiles.into_iter().enumerate() {
        let (x, z) = tile_offset(i, tile_size);
        tile.transform.translation = Vec3::new(x, 0.0, z);
        group.add(tile);
    }

    let center = group.world_bounds().center();
    group.transform.translation = Vec3::new(-center.x, 0.0, -center.z);
    log::debug!(
        "terrain group recentered by ({:.2}, 0, {:.2})",
        -center.x,
        -center.z
    );
    group
}

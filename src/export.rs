use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use relief_mesh::SceneNode;
use relief_runtime::Terrain;
use relief_tiles::Tile;
use serde::Serialize;

#[derive(Serialize)]
struct SceneFile<'a> {
    target: Tile,
    tiles: Vec<Tile>,
    elevation_min: f32,
    elevation_max: f32,
    root: &'a SceneNode,
}

/// Texture path relative to the output directory for a texture named `z/x/y`.
pub fn texture_path(name: &str) -> PathBuf {
    Path::new("textures").join(format!("{}.png", name.replace('/', "_")))
}

/// Writes `scene.json` plus one PNG per distinct surface texture under `out`.
pub fn write_terrain(terrain: &Terrain, out: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(out.join("textures"))?;

    let mut textures = Vec::new();
    terrain.group.walk(&mut |node| {
        if let Some(tex) = node.material().and_then(|m| m.texture()) {
            if !textures.iter().any(|t: &&relief_raster::Texture| t.name == tex.name) {
                textures.push(tex);
            }
        }
    });
    for tex in textures {
        let Some(img) = tex.to_image() else {
            return Err(format!("texture {} has inconsistent pixel data", tex.name).into());
        };
        let path = out.join(texture_path(&tex.name));
        img.save(&path)?;
        log::debug!("wrote {}", path.display());
    }

    let file = SceneFile {
        target: terrain.block.target(),
        tiles: terrain.block.tiles().to_vec(),
        elevation_min: terrain.range.min,
        elevation_max: terrain.range.max,
        root: &terrain.group,
    };
    let path = out.join("scene.json");
    fs::write(&path, serde_json::to_string_pretty(&file)?)?;
    log::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relief_geom::Vec3;
    use relief_raster::{ElevationGrid, ElevationRange, RgbaImage, decode_texture};
    use relief_runtime::BuildTimings;
    use relief_tiles::locate_block;

    fn small_terrain() -> Terrain {
        let block = locate_block(7.0, 46.0, 9).unwrap();
        let range = ElevationRange { min: 0.0, max: 10.0 };
        let tiles = block
            .iter()
            .map(|tile| {
                let grid = ElevationGrid::new(2, vec![0.0, 5.0, 10.0, 5.0]).unwrap();
                let img = RgbaImage::from_pixel(2, 2, image::Rgba([10, 20, 30, 255]));
                relief_mesh::build_tile(*tile, &grid, range, decode_texture(img, tile.to_string()))
            })
            .collect();
        Terrain {
            block,
            range,
            group: relief_mesh::assemble(tiles, 2, Vec3::ONE),
            timings: BuildTimings::default(),
        }
    }

    #[test]
    fn writes_scene_and_one_png_per_tile() {
        let dir = tempfile::tempdir().unwrap();
        let terrain = small_terrain();
        write_terrain(&terrain, dir.path()).unwrap();

        let json = fs::read_to_string(dir.path().join("scene.json")).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["tiles"].as_array().unwrap().len(), 4);
        assert_eq!(v["elevation_max"], 10.0);
        assert_eq!(v["root"]["children"].as_array().unwrap().len(), 4);

        for tile in terrain.block.iter() {
            let p = dir.path().join(texture_path(&tile.to_string()));
            let img = image::open(&p).unwrap();
            assert_eq!((img.width(), img.height()), (2, 2));
        }
    }

    #[test]
    fn texture_names_become_flat_file_names() {
        assert_eq!(texture_path("10/759/429"), Path::new("textures/10_759_429.png"));
    }
}

use std::time::Instant;

use rayon::prelude::*;
use relief_mesh::{SceneNode, assemble, build_tile};
use relief_raster::{ElevationRange, RasterFetcher};
use relief_tiles::{TileBlock, locate_block};

use crate::acquire::{acquire_elevation, acquire_textures};
use crate::error::TerrainError;
use crate::options::TerrainOptions;

#[derive(Clone, Copy, Debug, Default)]
pub struct BuildTimings {
    pub t_elevation_ms: u32,
    pub t_texture_ms: u32,
    pub t_mesh_ms: u32,
    pub t_total_ms: u32,
}

/// A finished terrain block.
#[derive(Clone, Debug)]
pub struct Terrain {
    pub block: TileBlock,
    pub range: ElevationRange,
    pub group: SceneNode,
    pub timings: BuildTimings,
}

fn elapsed_ms(t0: Instant) -> u32 {
    t0.elapsed().as_millis().min(u128::from(u32::MAX)) as u32
}

/// Builds the terrain group for `opts`. Fails before any fetch if the options
/// are invalid; otherwise any tile failure fails the whole build.
pub fn build_terrain<F: RasterFetcher + ?Sized>(
    opts: &TerrainOptions,
    fetcher: &F,
) -> Result<Terrain, TerrainError> {
    opts.validate()?;
    let t_start = Instant::now();
    let block = locate_block(opts.longitude, opts.latitude, opts.zoom)?;
    log::info!(
        "building terrain around {} (block origin {})",
        block.target(),
        block.origin()
    );

    // every grid must be decoded and the range folded before meshing starts
    let t0 = Instant::now();
    let (grids, range) = acquire_elevation(
        &block,
        &opts.endpoints,
        &opts.api_key,
        opts.tile_size,
        fetcher,
    )?;
    let t_elevation_ms = elapsed_ms(t0);

    let t0 = Instant::now();
    let textures = acquire_textures(&block, &opts.endpoints, &opts.api_key, fetcher)?;
    let t_texture_ms = elapsed_ms(t0);

    let t0 = Instant::now();
    let jobs: Vec<_> = block
        .tiles()
        .iter()
        .copied()
        .zip(grids.iter())
        .zip(textures)
        .collect();
    let tiles: Vec<SceneNode> = jobs
        .into_par_iter()
        .map(|((tile, grid), texture)| build_tile(tile, grid, range, texture))
        .collect();
    let group = assemble(tiles, opts.tile_size, opts.group_scale());
    let t_mesh_ms = elapsed_ms(t0);

    let timings = BuildTimings {
        t_elevation_ms,
        t_texture_ms,
        t_mesh_ms,
        t_total_ms: elapsed_ms(t_start),
    };
    log::info!(
        "terrain ready in {} ms (elevation {} ms, textures {} ms, mesh {} ms)",
        timings.t_total_ms,
        timings.t_elevation_ms,
        timings.t_texture_ms,
        timings.t_mesh_ms
    );
    Ok(Terrain {
        block,
        range,
        group,
        timings,
    })
}

/// Callback form of [`build_terrain`]: `on_load` runs exactly once on success
/// and never on failure.
pub fn load_terrain<F, C>(opts: &TerrainOptions, fetcher: &F, on_load: C) -> Result<(), TerrainError>
where
    F: RasterFetcher + ?Sized,
    C: FnOnce(Terrain),
{
    let terrain = build_terrain(opts, fetcher)?;
    on_load(terrain);
    Ok(())
}

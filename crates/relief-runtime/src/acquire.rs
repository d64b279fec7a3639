use relief_raster::{
    ElevationGrid, ElevationRange, RasterFetcher, Texture, decode_elevation, decode_texture,
    fetch_raster,
};
use relief_tiles::{Tile, TileBlock, TileEndpoints};

use crate::error::TerrainError;
use crate::fanout::fan_out;

/// Fetches and decodes the elevation raster of every tile (one worker per
/// tile), then folds the block-wide range over all samples.
///
/// Any tile failure fails the whole block; the first failure in tile order is
/// reported.
pub fn acquire_elevation<F: RasterFetcher + ?Sized>(
    block: &TileBlock,
    endpoints: &TileEndpoints,
    api_key: &str,
    tile_size: usize,
    fetcher: &F,
) -> Result<(Vec<ElevationGrid>, ElevationRange), TerrainError> {
    let results = fan_out("elevation", block.tiles(), |tile| {
        let url = endpoints.elevation_url(*tile, api_key);
        fetch_raster(fetcher, &url)
            .and_then(|img| decode_elevation(&img, tile_size))
            .map_err(|source| tile_error(*tile, source))
    });
    let grids = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    let range = ElevationRange::fold(&grids);
    log::info!(
        "elevation for block {}: range [{:.1}, {:.1}] m",
        block.origin(),
        range.min,
        range.max
    );
    Ok((grids, range))
}

/// Fetches the satellite raster of every tile as a texture, in block order.
pub fn acquire_textures<F: RasterFetcher + ?Sized>(
    block: &TileBlock,
    endpoints: &TileEndpoints,
    api_key: &str,
    fetcher: &F,
) -> Result<Vec<Texture>, TerrainError> {
    let results = fan_out("satellite", block.tiles(), |tile| {
        let url = endpoints.satellite_url(*tile, api_key);
        fetch_raster(fetcher, &url)
            .map(|img| decode_texture(img, tile.to_string()))
            .map_err(|source| tile_error(*tile, source))
    });
    results.into_iter().collect()
}

fn tile_error(tile: Tile, source: relief_raster::RasterError) -> TerrainError {
    log::warn!("tile {} failed: {}", tile, source);
    TerrainError::Tile { tile, source }
}

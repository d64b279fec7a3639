use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use image::{ImageBuffer, ImageOutputFormat, Rgba, RgbaImage};
use relief_mesh::NodeKind;
use relief_raster::{RasterError, RasterFetcher};
use relief_runtime::{
    TerrainError, TerrainOptions, acquire_elevation, build_terrain, load_terrain, spawn_build,
};
use relief_tiles::{ConfigError, Tile, TileEndpoints, locate_block};

/// In-memory raster service keyed by URL, counting every request.
struct FakeFetcher {
    rasters: HashMap<String, Vec<u8>>,
    delays: HashMap<String, Duration>,
    calls: AtomicUsize,
}

impl FakeFetcher {
    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RasterFetcher for FakeFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, RasterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(d) = self.delays.get(url) {
            thread::sleep(*d);
        }
        self.rasters.get(url).cloned().ok_or_else(|| RasterError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

fn png(img: &RgbaImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageOutputFormat::Png).unwrap();
    out.into_inner()
}

/// Opaque pixel that decodes to exactly `meters` (whole meters only).
fn pixel_for(meters: i32) -> Rgba<u8> {
    let sum = ((meters + 10000) * 10) as u32;
    let (r, rem) = (sum / 65025, sum % 65025);
    Rgba([r as u8, (rem / 255) as u8, (rem % 255) as u8, 255])
}

fn elevation_png(heights: [i32; 4]) -> Vec<u8> {
    let img: RgbaImage = ImageBuffer::from_fn(2, 2, |x, y| pixel_for(heights[(y * 2 + x) as usize]));
    png(&img)
}

fn endpoints() -> TileEndpoints {
    TileEndpoints {
        elevation: "mem://elevation/{z}/{x}/{y}?k={token}".into(),
        satellite: "mem://satellite/{z}/{x}/{y}?k={token}".into(),
    }
}

fn options() -> TerrainOptions {
    let mut o = TerrainOptions::new(86.930909, 27.983873, "key");
    o.tile_size = 2;
    o.zoom = 10;
    o.endpoints = endpoints();
    o
}

/// Serves the block for `options()`: tile 0 spans the whole [0, 100] range.
fn fake_for(opts: &TerrainOptions) -> FakeFetcher {
    let block = locate_block(opts.longitude, opts.latitude, opts.zoom).unwrap();
    let heights = [[0, 50, 100, 25], [25, 25, 50, 75], [60, 60, 60, 60], [10, 20, 30, 40]];
    let sat: RgbaImage = ImageBuffer::from_pixel(2, 2, Rgba([10, 200, 30, 255]));
    let mut rasters = HashMap::new();
    let mut delays = HashMap::new();
    for (i, tile) in block.iter().enumerate() {
        let url = opts.endpoints.elevation_url(*tile, &opts.api_key);
        // later tiles finish first
        delays.insert(url.clone(), Duration::from_millis(10 * (4 - i as u64)));
        rasters.insert(url, elevation_png(heights[i]));
        rasters.insert(opts.endpoints.satellite_url(*tile, &opts.api_key), png(&sat));
    }
    FakeFetcher {
        rasters,
        delays,
        calls: AtomicUsize::new(0),
    }
}

#[test]
fn pixel_helper_is_exact() {
    for m in [0, 50, 100, -50, 8848] {
        let p = pixel_for(m).0;
        assert_eq!(relief_raster::elevation_height(p[0], p[1], p[2], p[3]), m as f32);
    }
}

#[test]
fn end_to_end_heights_use_block_range() {
    let opts = options();
    let fetcher = fake_for(&opts);
    let terrain = build_terrain(&opts, &fetcher).unwrap();
    assert_eq!(terrain.range.min, 0.0);
    assert_eq!(terrain.range.max, 100.0);
    assert_eq!(fetcher.calls(), 8);

    let tile0 = &terrain.group.children[0];
    let z: Vec<f32> = tile0.mesh().unwrap().vertices().map(|v| v.z).collect();
    assert_eq!(z, vec![0.0, 100.0, 200.0, 50.0]);
    // the flat tile is displaced by the shared range, not its own
    let tile2 = &terrain.group.children[2];
    assert!(tile2.mesh().unwrap().vertices().all(|v| v.z == 120.0));
}

#[test]
fn grids_come_back_in_block_order() {
    let opts = options();
    let fetcher = fake_for(&opts);
    let block = locate_block(opts.longitude, opts.latitude, opts.zoom).unwrap();
    let (grids, _) = acquire_elevation(&block, &opts.endpoints, &opts.api_key, 2, &fetcher).unwrap();
    assert_eq!(grids[0].samples(), &[0.0, 50.0, 100.0, 25.0]);
    assert_eq!(grids[3].samples(), &[10.0, 20.0, 30.0, 40.0]);
}

#[test]
fn assembled_group_is_centered_and_skirted() {
    let opts = options();
    let terrain = build_terrain(&opts, &fake_for(&opts)).unwrap();
    let group = &terrain.group;
    assert_eq!(group.transform.translation.y, 0.0);
    let c = group.world_bounds().center();
    assert!(c.x.abs() < 1e-3 && c.z.abs() < 1e-3);
    assert_eq!(group.children.len(), 4);
    for tile in &group.children {
        assert!(matches!(tile.kind, NodeKind::Surface { .. }));
        assert_eq!(tile.children.len(), 4);
        let tex = tile.material().and_then(|m| m.texture()).unwrap();
        assert_eq!((tex.width, tex.height), (2, 2));
    }
}

#[test]
fn missing_key_fails_before_any_fetch() {
    let mut opts = options();
    let fetcher = fake_for(&opts);
    opts.api_key.clear();
    let err = build_terrain(&opts, &fetcher).unwrap_err();
    assert_eq!(err, TerrainError::Config(ConfigError::MissingApiKey));
    assert_eq!(fetcher.calls(), 0);
}

#[test]
fn bad_coordinates_fail_before_any_fetch() {
    let mut opts = options();
    let fetcher = fake_for(&opts);
    opts.latitude = 89.0;
    assert!(matches!(
        build_terrain(&opts, &fetcher),
        Err(TerrainError::Config(ConfigError::InvalidLatitude(_)))
    ));
    assert_eq!(fetcher.calls(), 0);
}

#[test]
fn one_failing_tile_aborts_the_build() {
    let opts = options();
    let mut fetcher = fake_for(&opts);
    let block = locate_block(opts.longitude, opts.latitude, opts.zoom).unwrap();
    let broken: Tile = block.tiles()[2];
    fetcher
        .rasters
        .remove(&opts.endpoints.elevation_url(broken, &opts.api_key));

    let mut loaded = 0;
    let res = load_terrain(&opts, &fetcher, |_| loaded += 1);
    assert_eq!(loaded, 0);
    match res {
        Err(TerrainError::Tile { tile, source }) => {
            assert_eq!(tile, broken);
            assert!(matches!(source, RasterError::Status { status: 404, .. }));
        }
        other => panic!("expected tile error, got {:?}", other),
    }
    // no textures requested once elevation failed
    assert_eq!(fetcher.calls(), 4);
}

#[test]
fn wrong_raster_size_is_a_tile_error() {
    let mut opts = options();
    let fetcher = fake_for(&opts);
    opts.tile_size = 4;
    assert!(matches!(
        build_terrain(&opts, &fetcher),
        Err(TerrainError::Tile {
            source: RasterError::Dimensions { expected: 4, .. },
            ..
        })
    ));
}

#[test]
fn callback_runs_once_on_success() {
    let opts = options();
    let fetcher = fake_for(&opts);
    let mut seen = Vec::new();
    load_terrain(&opts, &fetcher, |t| seen.push(t.block.target())).unwrap();
    assert_eq!(seen, vec![Tile::containing(opts.longitude, opts.latitude, opts.zoom).unwrap()]);
}

#[test]
fn background_job_yields_result() {
    let opts = options();
    let fetcher = Arc::new(fake_for(&opts));
    let job = spawn_build(opts, fetcher.clone());
    let terrain = job.join().unwrap();
    assert_eq!(terrain.group.children.len(), 4);
    assert_eq!(fetcher.calls(), 8);
}

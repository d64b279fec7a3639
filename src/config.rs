use std::error::Error;
use std::fs;
use std::path::Path;

use relief_runtime::TerrainOptions;
use relief_tiles::TileEndpoints;
use serde::Deserialize;

use crate::cli::BuildArgs;

/// Terrain options as written in a config file; every field may be left to
/// the command line.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub tile_size: Option<usize>,
    #[serde(default)]
    pub zoom: Option<u8>,
    #[serde(default)]
    pub vertical_scale: Option<f32>,
    #[serde(default)]
    pub horizontal_scale: Option<f32>,
    #[serde(default)]
    pub endpoints: Option<TileEndpoints>,
}

pub fn load_file(path: &Path) -> Result<FileConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let cfg: FileConfig = toml::from_str(&s)?;
    Ok(cfg)
}

/// Merges the config file (if any) with command-line overrides.
pub fn resolve(args: &BuildArgs) -> Result<TerrainOptions, Box<dyn Error>> {
    let file = match &args.config {
        Some(path) => load_file(path)?,
        None => FileConfig::default(),
    };
    merge(file, args)
}

pub fn merge(file: FileConfig, args: &BuildArgs) -> Result<TerrainOptions, Box<dyn Error>> {
    let longitude = args
        .lon
        .or(file.longitude)
        .ok_or("longitude is required (--lon or `longitude` in the config file)")?;
    let latitude = args
        .lat
        .or(file.latitude)
        .ok_or("latitude is required (--lat or `latitude` in the config file)")?;
    let api_key = args.api_key.clone().or(file.api_key).unwrap_or_default();

    let mut opts = TerrainOptions::new(longitude, latitude, api_key);
    if let Some(v) = args.tile_size.or(file.tile_size) {
        opts.tile_size = v;
    }
    if let Some(v) = args.zoom.or(file.zoom) {
        opts.zoom = v;
    }
    if let Some(v) = args.vertical_scale.or(file.vertical_scale) {
        opts.vertical_scale = v;
    }
    if let Some(v) = args.horizontal_scale.or(file.horizontal_scale) {
        opts.horizontal_scale = v;
    }
    if let Some(e) = file.endpoints {
        opts.endpoints = e;
    }
    Ok(opts)
}

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "relief", version, about = "Builds a skirted 2x2 terrain block from elevation and satellite tiles")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the tiles around a point and export the terrain scene.
    Build(BuildArgs),
    /// Print the tile block for a point without fetching anything.
    Locate(LocateArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// TOML file with terrain options; flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,
    #[arg(long)]
    pub zoom: Option<u8>,
    #[arg(long)]
    pub tile_size: Option<usize>,
    #[arg(long, env = "RELIEF_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    #[arg(long)]
    pub vertical_scale: Option<f32>,
    #[arg(long)]
    pub horizontal_scale: Option<f32>,
    /// Output directory for scene.json and textures.
    #[arg(long, default_value = "terrain-out")]
    pub out: PathBuf,
    /// Rebuild whenever the config file changes.
    #[arg(long)]
    pub watch: bool,
    /// Also write debug-level logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct LocateArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,
    #[arg(long, default_value_t = 10)]
    pub zoom: u8,
}

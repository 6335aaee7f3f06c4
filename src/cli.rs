use std::path::PathBuf;

use clap::Parser;

/// Voxel block and OBJ model viewer.
#[derive(Debug, Parser)]
#[command(name = "blockview", version)]
pub struct Cli {
    /// Debug logging and an OBJ vertex dump.
    #[arg(short, long)]
    pub verbose: bool,

    /// Wavefront OBJ model to show above the blocks.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Window width in pixels.
    #[arg(short, long)]
    pub width: Option<i32>,

    /// Window height in pixels (no short flag; `-h` is help).
    #[arg(long)]
    pub height: Option<i32>,

    /// PNG texture atlas.
    #[arg(short, long)]
    pub image: Option<PathBuf>,

    /// Viewer config, defaults to assets/blockview.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding assets/.
    #[arg(long)]
    pub assets: Option<String>,

    /// Terrain seed.
    #[arg(long)]
    pub seed: Option<i32>,

    #[arg(long)]
    pub vsync: bool,

    /// Reload assets/voxels/blocks.toml when it changes.
    #[arg(long)]
    pub watch: bool,
}

//! Built-in demo scene: a rectangle of block instances filled with terrain.
#![forbid(unsafe_code)]

pub mod scene;
pub mod terrain;

pub use scene::{BlockPlacement, SceneConfig, SceneLayout, generate_scene};
pub use terrain::{TerrainGen, TerrainMode, TerrainParams, column_type};

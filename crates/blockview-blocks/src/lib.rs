//! Block types and their per-face atlas tiles.
#![forbid(unsafe_code)]

pub mod config;
pub mod table;
pub mod types;

pub use config::{BlockDef, BlocksConfig, BlocksConfigError};
pub use table::{FACES_PER_BLOCK, FaceTextureTable, TileIndex};
pub use types::BlockType;

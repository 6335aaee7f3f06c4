use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::table::{FACES_PER_BLOCK, FaceTextureTable, TileIndex};
use crate::types::BlockType;

#[derive(Debug, thiserror::Error)]
pub enum BlocksConfigError {
    #[error("failed to read blocks config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse blocks config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown block type `{0}`")]
    UnknownBlock(String),
    #[error("block `{0}` cannot carry textures")]
    EmptyBlock(String),
}

/// Contents of `blocks.toml`.
///
/// ```toml
/// [[blocks]]
/// name = "topsoil"
/// top = 0
/// bottom = 1
/// side = 3
///
/// [[blocks]]
/// name = "stone"
/// tiles = [16, 16, 17, 17, 17, 17]
/// ```
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlocksConfig {
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
}

/// Per-block tile overrides. Applied in the order `all`, `side`, `top`,
/// `bottom`, then `tiles` replaces the whole row.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlockDef {
    pub name: String,
    #[serde(default)]
    pub all: Option<TileIndex>,
    #[serde(default)]
    pub top: Option<TileIndex>,
    #[serde(default)]
    pub bottom: Option<TileIndex>,
    #[serde(default)]
    pub side: Option<TileIndex>,
    #[serde(default)]
    pub tiles: Option<[TileIndex; FACES_PER_BLOCK]>,
}

impl BlocksConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, BlocksConfigError> {
        Ok(toml::from_str(s)?)
    }
}

impl FaceTextureTable {
    pub fn from_config(cfg: &BlocksConfig) -> Result<Self, BlocksConfigError> {
        let mut table = FaceTextureTable::default();
        for def in &cfg.blocks {
            let ty = BlockType::from_name(&def.name)
                .ok_or_else(|| BlocksConfigError::UnknownBlock(def.name.clone()))?;
            if ty.is_empty() {
                return Err(BlocksConfigError::EmptyBlock(def.name.clone()));
            }
            if let Some(t) = def.all {
                table.set_tiles(ty, [t; FACES_PER_BLOCK]);
            }
            if let Some(t) = def.side {
                table.set_sides(ty, t);
            }
            if let Some(t) = def.top {
                table.set_top(ty, t);
            }
            if let Some(t) = def.bottom {
                table.set_bottom(ty, t);
            }
            if let Some(row) = def.tiles {
                table.set_tiles(ty, row);
            }
        }
        Ok(table)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, BlocksConfigError> {
        Self::from_config(&BlocksConfig::from_toml_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BlocksConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}

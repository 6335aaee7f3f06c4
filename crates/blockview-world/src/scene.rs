use blockview_chunk::{BLOCK_DEPTH, BLOCK_WIDTH, VoxelGrid};
use blockview_geom::Vec3;
use serde::Deserialize;

use crate::terrain::{TerrainGen, TerrainParams};

fn default_blocks() -> u32 {
    4
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SceneConfig {
    #[serde(default = "default_blocks")]
    pub blocks_x: u32,
    #[serde(default = "default_blocks")]
    pub blocks_z: u32,
    #[serde(default)]
    pub terrain: TerrainParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            blocks_x: default_blocks(),
            blocks_z: default_blocks(),
            terrain: TerrainParams::default(),
        }
    }
}

/// One block instance slot: grid coordinates and world-space origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlockPlacement {
    pub bx: u32,
    pub bz: u32,
    pub origin: Vec3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneLayout {
    pub placements: Vec<BlockPlacement>,
}

impl SceneLayout {
    /// Number of blocks in a `blocks_x` by `blocks_z` layout, widened before
    /// multiplying so config values cannot overflow `u32`.
    #[inline]
    pub fn block_count(blocks_x: u32, blocks_z: u32) -> usize {
        blocks_x as usize * blocks_z as usize
    }

    /// Blocks at `(bx * 16, 0, bz * 16)`, x varying fastest.
    pub fn new(blocks_x: u32, blocks_z: u32) -> Self {
        let mut placements = Vec::with_capacity(Self::block_count(blocks_x, blocks_z));
        for bz in 0..blocks_z {
            for bx in 0..blocks_x {
                placements.push(BlockPlacement {
                    bx,
                    bz,
                    origin: Vec3::new(
                        (bx as usize * BLOCK_WIDTH) as f32,
                        0.0,
                        (bz as usize * BLOCK_DEPTH) as f32,
                    ),
                });
            }
        }
        Self { placements }
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Point above the middle of the layout, handy as a look-at target.
    pub fn center(&self) -> Vec3 {
        let Some(last) = self.placements.last() else {
            return Vec3::ZERO;
        };
        let far = last.origin + Vec3::new(BLOCK_WIDTH as f32, 0.0, BLOCK_DEPTH as f32);
        far * 0.5
    }
}

/// Lays out the scene and fills one grid per placement.
pub fn generate_scene(cfg: &SceneConfig) -> Vec<(BlockPlacement, VoxelGrid)> {
    let layout = SceneLayout::new(cfg.blocks_x, cfg.blocks_z);
    let terrain = TerrainGen::new(cfg.terrain.clone());
    let blocks: Vec<_> = layout
        .placements
        .iter()
        .map(|p| {
            let mut grid = VoxelGrid::new();
            terrain.fill_block(&mut grid, p.origin.x as i32, p.origin.z as i32);
            (*p, grid)
        })
        .collect();
    log::info!(
        target: "scene",
        "generated {} blocks ({}x{}, {:?} terrain, seed {})",
        blocks.len(),
        cfg.blocks_x,
        cfg.blocks_z,
        cfg.terrain.mode,
        cfg.terrain.seed
    );
    blocks
}

use blockview_blocks::BlockType;
use blockview_chunk::{BLOCK_DEPTH, BLOCK_HEIGHT, BLOCK_WIDTH, VoxelGrid};
use fastnoise_lite::{FastNoiseLite, NoiseType};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TerrainMode {
    Noise,
    Flat,
}

fn default_mode() -> TerrainMode {
    TerrainMode::Noise
}
fn default_seed() -> i32 {
    1337
}
fn default_base_height() -> f32 {
    8.0
}
fn default_amplitude() -> f32 {
    4.0
}
fn default_frequency() -> f32 {
    0.03
}
fn default_dirt_depth() -> usize {
    3
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TerrainParams {
    #[serde(default = "default_mode")]
    pub mode: TerrainMode,
    #[serde(default = "default_seed")]
    pub seed: i32,
    /// Column height (in cells) where the noise is zero.
    #[serde(default = "default_base_height")]
    pub base_height: f32,
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
    #[serde(default = "default_frequency")]
    pub frequency: f32,
    /// Dirt cells under the topsoil cell.
    #[serde(default = "default_dirt_depth")]
    pub dirt_depth: usize,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            seed: default_seed(),
            base_height: default_base_height(),
            amplitude: default_amplitude(),
            frequency: default_frequency(),
            dirt_depth: default_dirt_depth(),
        }
    }
}

/// Material of cell `y` in a column `height` cells tall: the top cell is
/// topsoil, the next `dirt_depth` are dirt, the rest stone.
#[inline]
pub fn column_type(y: usize, height: usize, dirt_depth: usize) -> BlockType {
    if y >= height {
        BlockType::Empty
    } else if y + 1 == height {
        BlockType::Topsoil
    } else if y + 1 + dirt_depth >= height {
        BlockType::Dirt
    } else {
        BlockType::Stone
    }
}

pub struct TerrainGen {
    params: TerrainParams,
    noise: FastNoiseLite,
}

impl TerrainGen {
    pub fn new(params: TerrainParams) -> Self {
        let mut noise = FastNoiseLite::with_seed(params.seed);
        noise.set_noise_type(Some(NoiseType::OpenSimplex2));
        noise.set_frequency(Some(params.frequency));
        Self { params, noise }
    }

    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Column height at world cell `(wx, wz)`, clamped to `1..=BLOCK_HEIGHT`.
    pub fn height_at(&self, wx: i32, wz: i32) -> usize {
        let h = match self.params.mode {
            TerrainMode::Flat => self.params.base_height,
            TerrainMode::Noise => {
                let n = self.noise.get_noise_2d(wx as f32, wz as f32);
                self.params.base_height + n * self.params.amplitude
            }
        };
        (h.round() as i64).clamp(1, BLOCK_HEIGHT as i64) as usize
    }

    /// Fills `grid` with the terrain of the block whose min corner sits at
    /// world cell `(origin_x, origin_z)`. Existing contents are replaced.
    pub fn fill_block(&self, grid: &mut VoxelGrid, origin_x: i32, origin_z: i32) {
        grid.clear();
        for z in 0..BLOCK_DEPTH {
            for x in 0..BLOCK_WIDTH {
                let h = self.height_at(origin_x + x as i32, origin_z + z as i32);
                for y in 0..h {
                    grid.set_voxel(x, y, z, column_type(y, h, self.params.dirt_depth));
                }
            }
        }
    }
}

//! Shared constants for blockview-mesh-cpu.

pub const FACES_PER_VOXEL: usize = 6;
/// Two triangles per face, no index sharing.
pub const VERTS_PER_FACE: usize = 6;
pub const VERTS_PER_VOXEL: usize = FACES_PER_VOXEL * VERTS_PER_FACE;

pub(crate) const FLOATS_PER_POS: usize = 3;
pub(crate) const FLOATS_PER_UV: usize = 2;
pub(crate) const FLOATS_PER_NORMAL: usize = 3;

// Texture atlas: 16x16 tiles
pub const ATLAS_TILES_PER_ROW: u16 = 16;
pub const ATLAS_TILE_SIZE: f32 = 1.0 / ATLAS_TILES_PER_ROW as f32;
/// Keeps sampling away from tile edges so neighbouring tiles don't bleed in.
pub const UV_INSET: f32 = 0.01;

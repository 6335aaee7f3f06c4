//! Fixed-size voxel grid backing one block instance.
#![forbid(unsafe_code)]

use blockview_blocks::BlockType;

pub const BLOCK_WIDTH: usize = 16;
pub const BLOCK_HEIGHT: usize = 16;
pub const BLOCK_DEPTH: usize = 16;
pub const BLOCK_VOLUME: usize = BLOCK_WIDTH * BLOCK_HEIGHT * BLOCK_DEPTH;

/// 16x16x16 grid of block types, stored z-major then y then x.
///
/// Coordinates are a caller-guaranteed precondition: out-of-range values trip
/// a debug assertion and are not recoverable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid {
    cells: Vec<BlockType>,
    revision: u64,
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl VoxelGrid {
    pub fn new() -> Self {
        Self {
            cells: vec![BlockType::Empty; BLOCK_VOLUME],
            revision: 0,
        }
    }

    /// `z * W * H + y * W + x`
    #[inline]
    pub fn index(x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < BLOCK_WIDTH, "x out of range: {x}");
        debug_assert!(y < BLOCK_HEIGHT, "y out of range: {y}");
        debug_assert!(z < BLOCK_DEPTH, "z out of range: {z}");
        z * BLOCK_WIDTH * BLOCK_HEIGHT + y * BLOCK_WIDTH + x
    }

    /// Inverse of [`VoxelGrid::index`].
    #[inline]
    pub fn coords(index: usize) -> (usize, usize, usize) {
        let x = index % BLOCK_WIDTH;
        let y = (index / BLOCK_WIDTH) % BLOCK_HEIGHT;
        let z = index / (BLOCK_WIDTH * BLOCK_HEIGHT);
        (x, y, z)
    }

    /// Bounds test for callers holding signed coordinates.
    #[inline]
    pub fn contains(x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < BLOCK_WIDTH
            && (y as usize) < BLOCK_HEIGHT
            && (z as usize) < BLOCK_DEPTH
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> BlockType {
        self.cells[Self::index(x, y, z)]
    }

    #[inline]
    pub fn is_occupied(&self, x: usize, y: usize, z: usize) -> bool {
        self.get(x, y, z).is_solid()
    }

    #[inline]
    pub fn set_voxel(&mut self, x: usize, y: usize, z: usize, ty: BlockType) {
        let i = Self::index(x, y, z);
        self.cells[i] = ty;
        self.revision += 1;
    }

    #[inline]
    pub fn clear_voxel(&mut self, x: usize, y: usize, z: usize) {
        self.set_voxel(x, y, z, BlockType::Empty);
    }

    pub fn fill(&mut self, ty: BlockType) {
        self.cells.fill(ty);
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.fill(BlockType::Empty);
    }

    /// Bumped by every mutation; lets owners detect a stale mesh.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn cells(&self) -> &[BlockType] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|b| b.is_solid()).count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|b| b.is_empty())
    }

    /// Occupied cells as `(x, y, z, type)` in storage order.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, usize, usize, BlockType)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, b)| b.is_solid())
            .map(|(i, &b)| {
                let (x, y, z) = Self::coords(i);
                (x, y, z, b)
            })
    }
}

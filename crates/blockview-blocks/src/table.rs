use crate::types::BlockType;

/// Linear index of a tile in the 16x16 texture atlas.
pub type TileIndex = u16;

pub const FACES_PER_BLOCK: usize = 6;

// Face slots inside a tile row. Mirrors the mesher's face order without
// depending on the mesher crate.
const TOP: usize = 0;
const BOTTOM: usize = 1;
const SIDES: core::ops::Range<usize> = 2..6;

/// Atlas tiles for each face of each solid block type, in the order
/// top, bottom, back, front, left, right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceTextureTable {
    rows: [[TileIndex; FACES_PER_BLOCK]; BlockType::SOLID.len()],
}

impl Default for FaceTextureTable {
    fn default() -> Self {
        Self {
            rows: [
                [0, 1, 2, 2, 2, 2],       // Topsoil: grass top, dirt bottom, grass-side
                [1, 1, 1, 1, 1, 1],       // Dirt
                [16, 16, 16, 16, 16, 16], // Stone
            ],
        }
    }
}

impl FaceTextureTable {
    #[inline]
    pub fn tiles(&self, ty: BlockType) -> Option<&[TileIndex; FACES_PER_BLOCK]> {
        ty.solid_index().map(|i| &self.rows[i])
    }

    /// Tile for face slot `face` (`0..6`) of `ty`; `None` for `Empty`.
    #[inline]
    pub fn tile(&self, ty: BlockType, face: usize) -> Option<TileIndex> {
        self.tiles(ty).map(|row| row[face])
    }

    /// Replaces the full row for `ty`. Returns false for `Empty`.
    pub fn set_tiles(&mut self, ty: BlockType, tiles: [TileIndex; FACES_PER_BLOCK]) -> bool {
        match ty.solid_index() {
            Some(i) => {
                self.rows[i] = tiles;
                true
            }
            None => false,
        }
    }

    pub(crate) fn set_top(&mut self, ty: BlockType, tile: TileIndex) {
        if let Some(i) = ty.solid_index() {
            self.rows[i][TOP] = tile;
        }
    }

    pub(crate) fn set_bottom(&mut self, ty: BlockType, tile: TileIndex) {
        if let Some(i) = ty.solid_index() {
            self.rows[i][BOTTOM] = tile;
        }
    }

    pub(crate) fn set_sides(&mut self, ty: BlockType, tile: TileIndex) {
        if let Some(i) = ty.solid_index() {
            for f in SIDES {
                self.rows[i][f] = tile;
            }
        }
    }
}

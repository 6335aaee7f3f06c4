//! Texture atlas addressing: a 16x16 sheet of square tiles.

use blockview_blocks::TileIndex;

use crate::constants::{ATLAS_TILE_SIZE, ATLAS_TILES_PER_ROW, UV_INSET, VERTS_PER_FACE};

/// Per-vertex UVs of one face inside a single tile, matching the triangle
/// order of the face vertex templates.
pub const UV_TEMPLATE: [[f32; 2]; VERTS_PER_FACE] = [
    [UV_INSET, UV_INSET],
    [UV_INSET, 1.0 - UV_INSET],
    [1.0 - UV_INSET, UV_INSET],
    [1.0 - UV_INSET, UV_INSET],
    [UV_INSET, 1.0 - UV_INSET],
    [1.0 - UV_INSET, 1.0 - UV_INSET],
];

/// Atlas-space origin of tile `t`, before the V flip:
/// `((t mod 16) / 16, (t div 16) / 16)`.
#[inline]
pub fn tile_origin(tile: TileIndex) -> (f32, f32) {
    let col = tile % ATLAS_TILES_PER_ROW;
    let row = tile / ATLAS_TILES_PER_ROW;
    (col as f32 * ATLAS_TILE_SIZE, row as f32 * ATLAS_TILE_SIZE)
}

/// Maps a tile-local UV into the atlas, flipping V for the bottom-left
/// texture origin.
#[inline]
pub fn atlas_uv(tile: TileIndex, local: [f32; 2]) -> [f32; 2] {
    let (ox, oy) = tile_origin(tile);
    [
        local[0] * ATLAS_TILE_SIZE + ox,
        1.0 - (local[1] * ATLAS_TILE_SIZE + oy),
    ]
}

/// The six UV pairs emitted for a face textured with `tile`.
pub fn face_uvs(tile: TileIndex) -> [[f32; 2]; VERTS_PER_FACE] {
    UV_TEMPLATE.map(|uv| atlas_uv(tile, uv))
}

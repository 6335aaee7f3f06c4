use blockview_geom::Vec3;

use crate::constants::VERTS_PER_FACE;

/// Cube faces in emission order. The discriminant is the face slot used by
/// the block face texture table.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Top = 0,
    Bottom = 1,
    Back = 2,
    Front = 3,
    Left = 4,
    Right = 5,
}

/// Local-space corners of each face: two triangles on the unit cube
/// centred at the origin.
const FACE_VERTICES: [[[f32; 3]; VERTS_PER_FACE]; 6] = [
    // Top
    [
        [-0.5, 0.5, -0.5],
        [-0.5, 0.5, 0.5],
        [0.5, 0.5, -0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, 0.5],
        [0.5, 0.5, 0.5],
    ],
    // Bottom
    [
        [-0.5, -0.5, 0.5],
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
    ],
    // Back
    [
        [0.5, 0.5, -0.5],
        [0.5, -0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [0.5, -0.5, -0.5],
        [-0.5, -0.5, -0.5],
    ],
    // Front
    [
        [-0.5, 0.5, 0.5],
        [-0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
    ],
    // Left
    [
        [-0.5, 0.5, -0.5],
        [-0.5, -0.5, -0.5],
        [-0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
        [-0.5, -0.5, -0.5],
        [-0.5, -0.5, 0.5],
    ],
    // Right
    [
        [0.5, 0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, -0.5],
        [0.5, 0.5, -0.5],
        [0.5, -0.5, 0.5],
        [0.5, -0.5, -0.5],
    ],
];

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Back,
        Face::Front,
        Face::Left,
        Face::Right,
    ];

    /// Returns the `[0..6)` slot of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a slot `[0..6)` back into a `Face`.
    #[inline]
    pub fn from_index(i: usize) -> Option<Face> {
        Face::ALL.get(i).copied()
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        match self {
            Face::Top => Vec3::Y,
            Face::Bottom => Vec3::NEG_Y,
            Face::Back => Vec3::NEG_Z,
            Face::Front => Vec3::Z,
            Face::Left => Vec3::NEG_X,
            Face::Right => Vec3::X,
        }
    }

    /// Grid step `(dx, dy, dz)` to the cell this face looks at.
    #[inline]
    pub fn delta(self) -> (i32, i32, i32) {
        match self {
            Face::Top => (0, 1, 0),
            Face::Bottom => (0, -1, 0),
            Face::Back => (0, 0, -1),
            Face::Front => (0, 0, 1),
            Face::Left => (-1, 0, 0),
            Face::Right => (1, 0, 0),
        }
    }

    #[inline]
    pub fn vertices(self) -> &'static [[f32; 3]; VERTS_PER_FACE] {
        &FACE_VERTICES[self.index()]
    }
}

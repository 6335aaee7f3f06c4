//! Geometry, transform, and camera math for the viewer (no Raylib dependency).
#![forbid(unsafe_code)]

pub mod camera;
pub mod transform;

pub use camera::{Camera, DEFAULT_FAR, DEFAULT_NEAR};
pub use glam::{Mat4, Vec2, Vec3, Vec4};
pub use transform::{FrameMatrices, Transform};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point, or `None` for an empty input.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut it = points.into_iter();
        let first = it.next()?;
        let mut bb = Aabb::new(first, first);
        for p in it {
            bb.extend(p);
        }
        Some(bb)
    }

    /// Bounding box over a flat `[x, y, z, x, y, z, ...]` position array.
    pub fn from_flat(positions: &[f32]) -> Option<Self> {
        Self::from_points(
            positions
                .chunks_exact(3)
                .map(|p| Vec3::new(p[0], p[1], p[2])),
        )
    }

    #[inline]
    pub fn extend(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    #[inline]
    pub fn size(self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn center(self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Length of the min→max diagonal.
    #[inline]
    pub fn diagonal(self) -> f32 {
        self.size().length()
    }

    #[inline]
    pub fn translated(self, offset: Vec3) -> Self {
        Aabb::new(self.min + offset, self.max + offset)
    }
}

/// A single point light exported to shaders as `Light_Pos` / `Light_Col`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
}

impl Light {
    #[inline]
    pub const fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(3.0, 2.0, 3.0),
            color: Vec3::ONE,
        }
    }
}

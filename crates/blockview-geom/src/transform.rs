use glam::{Mat4, Vec3};

use crate::camera::Camera;

/// Position, Euler rotation (radians per axis) and scale of one renderable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    #[inline]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_uniform_scale(mut self, s: f32) -> Self {
        self.scale = Vec3::splat(s);
        self
    }

    /// `T * Rx * Ry * Rz * S`
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_scale(self.scale)
    }
}

/// Per-instance matrices uploaded as `M`, `V` and `MVP`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameMatrices {
    pub model: Mat4,
    pub view: Mat4,
    pub mvp: Mat4,
}

impl FrameMatrices {
    pub fn compute(transform: &Transform, camera: &Camera) -> Self {
        let model = transform.model_matrix();
        let view = *camera.view();
        let mvp = *camera.projection() * view * model;
        Self { model, view, mvp }
    }
}

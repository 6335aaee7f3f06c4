use glam::{Mat4, Vec2, Vec3};

pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 100.0;

/// First-person camera with camera-local movement and accumulated Euler angles.
///
/// Rotation is stored as `(pitch, yaw, roll)` in radians and recomposed every
/// move as `Rz(roll) * Rx(pitch) * Ry(yaw) * T(-position)`. Extreme pitch
/// values gimbal-lock; that is accepted.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    position: Vec3,
    angles: Vec3,
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    /// `pitch_yaw` and `fov_y` are in radians.
    pub fn new(position: Vec3, pitch_yaw: Vec2, fov_y: f32, aspect: f32) -> Self {
        Self::with_clip(position, pitch_yaw, fov_y, aspect, DEFAULT_NEAR, DEFAULT_FAR)
    }

    pub fn with_clip(
        position: Vec3,
        pitch_yaw: Vec2,
        fov_y: f32,
        aspect: f32,
        near: f32,
        far: f32,
    ) -> Self {
        let mut cam = Self {
            position,
            angles: Vec3::new(pitch_yaw.x, pitch_yaw.y, 0.0),
            fov_y,
            aspect,
            near,
            far,
            view: Mat4::IDENTITY,
            projection: Mat4::perspective_rh_gl(fov_y, aspect, near, far),
        };
        cam.move_by(Vec3::ZERO, Vec3::ZERO);
        cam
    }

    /// `(pitch, yaw)` that make a camera at `eye` look at `target`.
    pub fn angles_towards(eye: Vec3, target: Vec3) -> Vec2 {
        let d = (target - eye).normalize_or_zero();
        if d == Vec3::ZERO {
            return Vec2::ZERO;
        }
        Vec2::new(-d.y.clamp(-1.0, 1.0).asin(), d.x.atan2(-d.z))
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// `(pitch, yaw, roll)` in radians.
    #[inline]
    pub fn angles(&self) -> Vec3 {
        self.angles
    }

    #[inline]
    pub fn view(&self) -> &Mat4 {
        &self.view
    }

    #[inline]
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }

    #[inline]
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    #[inline]
    pub fn clip_planes(&self) -> (f32, f32) {
        (self.near, self.far)
    }

    #[inline]
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Camera X axis in world space (row 0 of the view matrix).
    #[inline]
    pub fn strafe(&self) -> Vec3 {
        self.view.row(0).truncate()
    }

    /// Camera Y axis in world space (row 1 of the view matrix).
    #[inline]
    pub fn height(&self) -> Vec3 {
        self.view.row(1).truncate()
    }

    /// Camera Z axis in world space (row 2 of the view matrix). The eye looks
    /// down the negative of this vector.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.view.row(2).truncate()
    }

    /// Moves along the current camera axes, then accumulates `rotate` as
    /// `(pitch, yaw, roll)` deltas and rebuilds the view.
    pub fn move_by(&mut self, translate: Vec3, rotate: Vec3) {
        let strafe = self.strafe();
        let height = self.height();
        let forward = self.forward();
        self.position += translate.x * strafe + translate.y * height + translate.z * forward;
        self.angles += rotate;
        self.rebuild_view();
    }

    /// Replaces the view with a look-at toward `target`. Stored angles are
    /// left as they were, so the next `move_by` returns to the Euler pose.
    pub fn look_at(&mut self, target: Vec3) {
        self.view = Mat4::look_at_rh(self.position, target, Vec3::Y);
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.rebuild_view();
    }

    /// Rebuilds the projection after a framebuffer resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
        self.projection = Mat4::perspective_rh_gl(self.fov_y, aspect, self.near, self.far);
    }

    fn rebuild_view(&mut self) {
        self.view = Mat4::from_rotation_z(self.angles.z)
            * Mat4::from_rotation_x(self.angles.x)
            * Mat4::from_rotation_y(self.angles.y)
            * Mat4::from_translation(-self.position);
    }
}

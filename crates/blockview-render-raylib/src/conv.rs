use blockview_geom::{Camera, Mat4, Vec3};
use raylib::core::math::Matrix;
use raylib::prelude::{Camera3D, Vector3};

pub fn vec3_to_rl(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

/// Raylib stores matrices column by column (`m0..m3` is column 0), the same
/// order as `Mat4::to_cols_array`.
pub fn mat4_to_rl(m: &Mat4) -> Matrix {
    let a = m.to_cols_array();
    Matrix {
        m0: a[0],
        m1: a[1],
        m2: a[2],
        m3: a[3],
        m4: a[4],
        m5: a[5],
        m6: a[6],
        m7: a[7],
        m8: a[8],
        m9: a[9],
        m10: a[10],
        m11: a[11],
        m12: a[12],
        m13: a[13],
        m14: a[14],
        m15: a[15],
    }
}

/// Raylib camera matching our view, used for depth state and debug draws.
/// The block shader takes its matrices from uniforms, not from this.
pub fn camera_to_rl(cam: &Camera) -> Camera3D {
    let eye = cam.position();
    let look = -cam.forward();
    Camera3D::perspective(
        vec3_to_rl(eye),
        vec3_to_rl(eye + look),
        vec3_to_rl(cam.height()),
        cam.fov_y().to_degrees(),
    )
}

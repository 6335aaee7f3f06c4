use blockview_geom::{Camera, FrameMatrices, Light, Mat4, Transform, Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn vec3_approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    approx_eq(a.x, b.x, eps) && approx_eq(a.y, b.y, eps) && approx_eq(a.z, b.z, eps)
}

fn mat_approx_eq(a: &Mat4, b: &Mat4, eps: f32) -> bool {
    a.to_cols_array()
        .iter()
        .zip(b.to_cols_array().iter())
        .all(|(x, y)| approx_eq(*x, *y, eps))
}

fn camera_at(p: Vec3) -> Camera {
    Camera::new(p, Vec2::ZERO, 45f32.to_radians(), 4.0 / 3.0)
}

#[test]
fn new_camera_view_is_inverse_translation() {
    let p = Vec3::new(3.0, 2.0, 3.0);
    let cam = camera_at(p);
    assert!(mat_approx_eq(cam.view(), &Mat4::from_translation(-p), 1e-6));
    assert!(vec3_approx_eq(cam.strafe(), Vec3::X, 1e-6));
    assert!(vec3_approx_eq(cam.height(), Vec3::Y, 1e-6));
    assert!(vec3_approx_eq(cam.forward(), Vec3::Z, 1e-6));
}

#[test]
fn forward_move_with_zero_rotation_follows_forward_basis() {
    let p = Vec3::new(1.0, 5.0, -2.0);
    let mut cam = camera_at(p);
    let fwd = cam.forward();
    cam.move_by(Vec3::new(0.0, 0.0, -2.5), Vec3::ZERO);
    assert!(vec3_approx_eq(cam.position(), p + fwd * -2.5, 1e-5));
    assert!(vec3_approx_eq(cam.angles(), Vec3::ZERO, 0.0));
}

#[test]
fn movement_is_camera_local_after_yaw() {
    let mut cam = camera_at(Vec3::ZERO);
    cam.move_by(Vec3::ZERO, Vec3::new(0.0, FRAC_PI_2, 0.0));
    let fwd = cam.forward();
    // A quarter yaw turns the camera Z axis onto the world X axis.
    assert!(approx_eq(fwd.y, 0.0, 1e-6));
    assert!(approx_eq(fwd.x.abs(), 1.0, 1e-6));
    cam.move_by(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO);
    assert!(vec3_approx_eq(cam.position(), fwd, 1e-5));
}

#[test]
fn rotation_only_move_keeps_position() {
    let p = Vec3::new(-4.0, 1.0, 7.0);
    let mut cam = camera_at(p);
    cam.move_by(Vec3::ZERO, Vec3::new(0.3, -0.7, 0.1));
    assert!(vec3_approx_eq(cam.position(), p, 1e-6));
    assert!(vec3_approx_eq(cam.angles(), Vec3::new(0.3, -0.7, 0.1), 1e-6));
}

#[test]
fn view_composes_roll_pitch_yaw_translate() {
    let p = Vec3::new(2.0, 0.5, 9.0);
    let mut cam = camera_at(p);
    cam.move_by(Vec3::ZERO, Vec3::new(0.2, 0.4, 0.6));
    let expect = Mat4::from_rotation_z(0.6)
        * Mat4::from_rotation_x(0.2)
        * Mat4::from_rotation_y(0.4)
        * Mat4::from_translation(-p);
    assert!(mat_approx_eq(cam.view(), &expect, 1e-5));
}

#[test]
fn projection_uses_fixed_clip_planes() {
    let cam = camera_at(Vec3::ZERO);
    let expect = Mat4::perspective_rh_gl(45f32.to_radians(), 4.0 / 3.0, 0.1, 100.0);
    assert!(mat_approx_eq(cam.projection(), &expect, 1e-6));
    assert_eq!(cam.clip_planes(), (0.1, 100.0));
}

#[test]
fn set_aspect_rebuilds_projection_only() {
    let mut cam = camera_at(Vec3::new(1.0, 1.0, 1.0));
    let view = *cam.view();
    cam.set_aspect(2.0);
    assert_eq!(*cam.view(), view);
    let expect = Mat4::perspective_rh_gl(45f32.to_radians(), 2.0, 0.1, 100.0);
    assert!(mat_approx_eq(cam.projection(), &expect, 1e-6));
}

#[test]
fn look_at_points_eye_toward_target() {
    let mut cam = camera_at(Vec3::new(0.0, 0.0, 5.0));
    cam.look_at(Vec3::ZERO);
    // The eye looks down -forward, so forward points back at the camera.
    assert!(vec3_approx_eq(cam.forward(), Vec3::Z, 1e-6));
    let eye_space = cam.view().transform_point3(Vec3::ZERO);
    assert!(vec3_approx_eq(eye_space, Vec3::new(0.0, 0.0, -5.0), 1e-5));
}

#[test]
fn frame_matrices_follow_p_v_m_order() {
    let mut cam = camera_at(Vec3::new(0.0, 3.0, 10.0));
    cam.move_by(Vec3::ZERO, Vec3::new(0.1, 0.2, 0.0));
    let t = Transform {
        position: Vec3::new(16.0, 0.0, 32.0),
        rotation: Vec3::new(0.0, 0.5, 0.0),
        scale: Vec3::splat(0.5),
    };
    let m = FrameMatrices::compute(&t, &cam);
    assert_eq!(m.model, t.model_matrix());
    assert_eq!(m.view, *cam.view());
    assert!(mat_approx_eq(&m.mvp, &(*cam.projection() * *cam.view() * m.model), 1e-5));
}

#[test]
fn light_default_matches_viewer_setup() {
    let l = Light::default();
    assert_eq!(l.position, Vec3::new(3.0, 2.0, 3.0));
    assert_eq!(l.color, Vec3::ONE);
}

#[test]
fn angles_towards_aims_the_euler_pose() {
    let eye = Vec3::new(-6.0, 22.0, -6.0);
    let target = Vec3::new(32.0, 8.0, 32.0);
    let angles = Camera::angles_towards(eye, target);
    let cam = Camera::new(eye, angles, 0.8, 1.0);
    let look = -cam.forward();
    assert!(vec3_approx_eq(look, (target - eye).normalize(), 1e-5));
    assert_eq!(Camera::angles_towards(eye, eye), Vec2::ZERO);
}

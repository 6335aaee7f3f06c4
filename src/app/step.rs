use blockview_geom::Vec3;

use super::state::SimState;
use crate::input::{Controls, InputSnapshot};

/// Spin rate of the OBJ model in radians per second, about X then Y.
const MODEL_SPIN: Vec3 = Vec3::new(0.25, 0.5, 0.0);

/// Advances the simulation by `dt` seconds.
pub fn step(state: &mut SimState, input: &InputSnapshot, dt: f32, controls: &Controls) {
    let dt = dt.max(0.0);
    let (translate, rotate) = input.movement(dt, controls);
    // Idle frames keep whatever view is set, including an initial look_at.
    if translate != Vec3::ZERO || rotate != Vec3::ZERO {
        state.camera.move_by(translate, rotate);
    }
    if state.light_follows_camera {
        state.light.position = state.camera.position();
    }
    if state.model_spin {
        state.model_rotation += MODEL_SPIN * dt;
    }
    state.tick += 1;
    state.elapsed += dt;
}

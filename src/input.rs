use blockview_geom::Vec3;
use raylib::prelude::*;
use serde::Deserialize;

fn default_move_speed() -> f32 {
    8.0
}
fn default_turn_speed() -> f32 {
    1.5
}
fn default_fast_multiplier() -> f32 {
    4.0
}

/// Movement tuning, the `[controls]` config section.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Controls {
    /// World units per second.
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,
    /// Radians per second.
    #[serde(default = "default_turn_speed")]
    pub turn_speed: f32,
    /// Applied to both movement and turning while Shift is held.
    #[serde(default = "default_fast_multiplier")]
    pub fast_multiplier: f32,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            move_speed: default_move_speed(),
            turn_speed: default_turn_speed(),
            fast_multiplier: default_fast_multiplier(),
        }
    }
}

/// Keys held down this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub yaw_left: bool,
    pub yaw_right: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub fast: bool,
    pub quit: bool,
}

fn axis(pos: bool, neg: bool) -> f32 {
    pos as i32 as f32 - neg as i32 as f32
}

impl InputSnapshot {
    pub fn poll(rl: &RaylibHandle) -> Self {
        use KeyboardKey::*;
        let down = |k| rl.is_key_down(k);
        Self {
            forward: down(KEY_W),
            back: down(KEY_S),
            left: down(KEY_A),
            right: down(KEY_D),
            up: down(KEY_PAGE_UP),
            down: down(KEY_PAGE_DOWN),
            pitch_up: down(KEY_UP),
            pitch_down: down(KEY_DOWN),
            yaw_left: down(KEY_LEFT),
            yaw_right: down(KEY_RIGHT),
            roll_left: down(KEY_Q),
            roll_right: down(KEY_E),
            fast: down(KEY_LEFT_SHIFT) || down(KEY_RIGHT_SHIFT),
            quit: down(KEY_ESCAPE),
        }
    }

    /// Camera-local `(translate, rotate)` for this frame, ready for
    /// `Camera::move_by`. The eye looks down -Z, so forward is negative z.
    pub fn movement(&self, dt: f32, controls: &Controls) -> (Vec3, Vec3) {
        let boost = if self.fast { controls.fast_multiplier } else { 1.0 };
        let step = controls.move_speed * boost * dt;
        let turn = controls.turn_speed * boost * dt;
        let translate = Vec3::new(
            axis(self.right, self.left),
            axis(self.up, self.down),
            axis(self.back, self.forward),
        ) * step;
        // Positive pitch tips the view down and positive yaw turns it right.
        let rotate = Vec3::new(
            axis(self.pitch_down, self.pitch_up),
            axis(self.yaw_right, self.yaw_left),
            axis(self.roll_right, self.roll_left),
        ) * turn;
        (translate, rotate)
    }
}

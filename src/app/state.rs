use std::path::PathBuf;
use std::sync::mpsc::Receiver;

use blockview_blocks::FaceTextureTable;
use blockview_geom::{Camera, Light, Vec3};
use blockview_render_raylib::{BlockInstance, Instance, ShaderProgram};
use raylib::prelude::Color;

use crate::input::Controls;

/// Everything `step` advances. Owned by the frame loop, no globals.
#[derive(Clone, Debug, PartialEq)]
pub struct SimState {
    pub camera: Camera,
    pub light: Light,
    pub light_follows_camera: bool,
    /// Euler angles of the spinning OBJ model.
    pub model_rotation: Vec3,
    pub model_spin: bool,
    pub tick: u64,
    pub elapsed: f32,
}

impl SimState {
    pub fn new(camera: Camera, light: Light) -> Self {
        Self {
            camera,
            light,
            light_follows_camera: false,
            model_rotation: Vec3::ZERO,
            model_spin: true,
            tick: 0,
            elapsed: 0.0,
        }
    }
}

/// Averages frame times over roughly one second.
#[derive(Clone, Debug, Default)]
pub struct FpsCounter {
    frames: u32,
    acc: f32,
}

impl FpsCounter {
    /// Returns the average rate once a second has accumulated.
    pub fn tick(&mut self, dt: f32) -> Option<f32> {
        self.frames += 1;
        self.acc += dt.max(0.0);
        if self.acc < 1.0 {
            return None;
        }
        let fps = self.frames as f32 / self.acc;
        self.frames = 0;
        self.acc = 0.0;
        Some(fps)
    }
}

pub struct App {
    pub sim: SimState,
    pub controls: Controls,
    pub shader: ShaderProgram,
    pub table: FaceTextureTable,
    pub blocks: Vec<BlockInstance>,
    pub model: Option<Instance>,
    pub clear_color: Color,
    pub title: String,
    pub blocks_path: PathBuf,
    pub(crate) fps: FpsCounter,
    pub(crate) blocks_event_rx: Option<Receiver<()>>,
}

use blockview_render_raylib::conv::camera_to_rl;
use raylib::prelude::*;

use super::App;

impl App {
    /// Clears, then draws every block and the optional model once.
    pub fn render(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let camera = &self.sim.camera;
        let light = &self.sim.light;
        let mut d = rl.begin_drawing(thread);
        d.clear_background(self.clear_color);
        {
            let mut d3 = d.begin_mode3D(camera_to_rl(camera));
            for block in &self.blocks {
                block.set_uniforms(&mut self.shader, camera, light);
                block.render(&mut d3);
            }
            if let Some(model) = &mut self.model {
                model.transform.rotation = self.sim.model_rotation;
                model.set_uniforms(&mut self.shader, camera, light);
                model.render(&mut d3);
            }
        }
    }
}

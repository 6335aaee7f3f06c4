mod init;
mod render;
mod state;
mod step;
mod watchers;

use raylib::prelude::*;

pub use init::LaunchOptions;
pub use state::App;
use step::step;

use crate::input::InputSnapshot;

impl App {
    /// Input-independent per-frame work, then one simulation step.
    fn update(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread, input: &InputSnapshot, dt: f32) {
        self.process_blocks_file_events(rl, thread);
        for block in self.blocks.iter_mut().filter(|b| b.is_dirty()) {
            block.generate_block(rl, thread, &self.shader, &self.table);
        }
        if rl.is_window_resized() {
            let (w, h) = (rl.get_screen_width().max(1), rl.get_screen_height().max(1));
            self.sim.camera.set_aspect(w as f32 / h as f32);
        }
        step(&mut self.sim, input, dt, &self.controls);
        if let Some(fps) = self.fps.tick(dt) {
            rl.set_window_title(thread, &format!("{} - {:3.0} fps", self.title, fps));
        }
    }

    /// Runs until Escape or the window is closed.
    pub fn run(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        while !rl.window_should_close() {
            let input = InputSnapshot::poll(rl);
            if input.quit {
                break;
            }
            let dt = rl.get_frame_time();
            self.update(rl, thread, &input, dt);
            self.render(rl, thread);
        }
        log::info!("exiting after {} frames ({:.1}s)", self.sim.tick, self.sim.elapsed);
    }
}

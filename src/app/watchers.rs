use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, channel};

use raylib::prelude::*;

use super::App;
use super::init::load_face_table;

/// Spawns a watcher thread that sends `()` whenever `path` changes.
pub fn watch_file(path: &Path) -> Receiver<()> {
    let (tx, rx) = channel::<()>();
    let path: PathBuf = path.to_path_buf();
    std::thread::spawn(move || {
        use notify::{EventKind, RecursiveMode, Watcher};
        let watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                match event.kind {
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Any => {
                        let _ = tx.send(());
                    }
                    _ => {}
                }
            }
        });
        let mut watcher = match watcher {
            Ok(w) => w,
            Err(e) => {
                log::warn!(target: "assets", "cannot watch {}: {e}", path.display());
                return;
            }
        };
        if let Err(e) = watcher.watch(&path, RecursiveMode::NonRecursive) {
            log::warn!(target: "assets", "cannot watch {}: {e}", path.display());
            return;
        }
        log::info!(target: "assets", "watching {}", path.display());
        loop {
            std::thread::sleep(std::time::Duration::from_secs(3600));
        }
    });
    rx
}

impl App {
    /// Reloads the face table after `blocks.toml` changed and rebuilds every
    /// block with it. A broken file keeps the previous table.
    pub fn process_blocks_file_events(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let Some(rx) = &self.blocks_event_rx else {
            return;
        };
        if rx.try_iter().count() == 0 {
            return;
        }
        match load_face_table(&self.blocks_path) {
            Ok(table) if table == self.table => {}
            Ok(table) => {
                self.table = table;
                for block in &mut self.blocks {
                    block.generate_block(rl, thread, &self.shader, &self.table);
                }
                log::info!(target: "assets", "face tiles reloaded, rebuilt {} blocks", self.blocks.len());
            }
            Err(e) => log::warn!(target: "assets", "keeping previous face tiles: {e}"),
        }
    }
}

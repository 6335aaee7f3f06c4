use std::error::Error;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use blockview_blocks::FaceTextureTable;
use blockview_chunk::BLOCK_HEIGHT;
use blockview_geom::{Camera, Light, Transform, Vec2, Vec3};
use blockview_io::{ObjMesh, RgbaImage};
use blockview_render_raylib::{BlockInstance, GpuMesh, Instance, ShaderProgram, Texture};
use blockview_world::{SceneLayout, generate_scene};
use raylib::prelude::*;

use super::state::{App, FpsCounter, SimState};
use crate::config::AppConfig;

/// Startup inputs that come from the command line rather than the config.
pub struct LaunchOptions {
    pub assets_root: PathBuf,
    pub image: PathBuf,
    pub model: Option<PathBuf>,
    pub dump_model: bool,
    pub watch_blocks: bool,
}

/// Face table from `path`, or the built-in table when the file is absent.
pub fn load_face_table(path: &Path) -> Result<FaceTextureTable, Box<dyn Error>> {
    if !path.exists() {
        log::info!(target: "assets", "no {}, using built-in face tiles", path.display());
        return Ok(FaceTextureTable::default());
    }
    let table = FaceTextureTable::load(path)?;
    log::info!(target: "assets", "loaded face tiles from {}", path.display());
    Ok(table)
}

/// Uniform scale that brings a model's bounding-box diagonal to `size`.
pub fn model_scale(scaler: f32, size: f32) -> f32 {
    if scaler > f32::EPSILON {
        size / scaler
    } else {
        1.0
    }
}

impl App {
    pub fn new(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        cfg: &AppConfig,
        launch: LaunchOptions,
    ) -> Result<Self, Box<dyn Error>> {
        let shader = ShaderProgram::load_with_base(rl, thread, &launch.assets_root)?;

        let image = RgbaImage::load_png(&launch.image)?;
        let texture = Texture::from_image(rl, thread, &image, 0, cfg.mesh.filter())
            .ok_or_else(|| format!("failed to upload texture {}", launch.image.display()))?;
        let texture = Rc::new(texture);

        let blocks_path = crate::assets::blocks_path(&launch.assets_root);
        let table = load_face_table(&blocks_path)?;

        let opts = cfg.mesh.options();
        let mut blocks = Vec::new();
        for (placement, grid) in generate_scene(&cfg.scene) {
            let mut block = BlockInstance::new(
                grid,
                Rc::clone(&texture),
                Transform::from_position(placement.origin),
                opts,
            );
            block.generate_block(rl, thread, &shader, &table);
            blocks.push(block);
        }
        let total: usize = blocks.iter().map(|b| b.vertex_count()).sum();
        log::info!(target: "mesh", "{} blocks, {} vertices ({:?})", blocks.len(), total, opts.culling);

        let layout = SceneLayout::new(cfg.scene.blocks_x, cfg.scene.blocks_z);
        let center = layout.center();

        let model = match &launch.model {
            Some(path) => Some(load_model(rl, thread, cfg, &shader, &texture, path, center, launch.dump_model)?),
            None => None,
        };

        let cam_pos = Vec3::from_array(cfg.camera.position);
        let target = cfg
            .camera
            .target
            .map(Vec3::from_array)
            .unwrap_or(center + Vec3::new(0.0, BLOCK_HEIGHT as f32 * 0.5, 0.0));
        let pitch_yaw: Vec2 = Camera::angles_towards(cam_pos, target);
        let camera = Camera::with_clip(
            cam_pos,
            pitch_yaw,
            cfg.camera.fov.to_radians(),
            cfg.aspect(),
            cfg.camera.near,
            cfg.camera.far,
        );
        let light = Light::new(
            Vec3::from_array(cfg.light.position),
            Vec3::from_array(cfg.light.color),
        );
        let mut sim = SimState::new(camera, light);
        sim.light_follows_camera = cfg.light.follow_camera;
        sim.model_spin = cfg.model.spin;
        if sim.light_follows_camera {
            sim.light.position = sim.camera.position();
        }

        let blocks_event_rx = if launch.watch_blocks {
            Some(super::watchers::watch_file(&blocks_path))
        } else {
            None
        };

        let [r, g, b] = cfg.window.clear_color;
        Ok(Self {
            sim,
            controls: cfg.controls.clone(),
            shader,
            table,
            blocks,
            model,
            clear_color: Color::new(r, g, b, 255),
            title: cfg.window.title.clone(),
            blocks_path,
            fps: FpsCounter::default(),
            blocks_event_rx,
        })
    }
}

#[allow(clippy::too_many_arguments)]
fn load_model(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    cfg: &AppConfig,
    shader: &ShaderProgram,
    texture: &Rc<Texture>,
    path: &Path,
    center: Vec3,
    dump: bool,
) -> Result<Instance, Box<dyn Error>> {
    let mut obj = ObjMesh::load(path)?;
    if dump {
        obj.dump();
    }
    obj.ensure_normals();
    // Rotation pivots on the model origin.
    obj.recenter();
    let scale = model_scale(obj.scaler(), cfg.model.size);
    if obj.face_count == 0 {
        return Err(format!("{} has no triangles to draw", path.display()).into());
    }
    let gpu = GpuMesh::from_obj(rl, thread, &obj)
        .ok_or_else(|| format!("failed to upload mesh from {}", path.display()))?;
    let hover = BLOCK_HEIGHT as f32 + cfg.model.hover;
    let transform = Transform {
        position: center + Vec3::new(0.0, hover, 0.0),
        ..Transform::default()
    }
    .with_uniform_scale(scale);
    log::info!(
        target: "assets",
        "model {}: {} vertices, scale {:.3}",
        path.display(),
        gpu.vertex_count,
        scale
    );
    Ok(Instance::new(gpu, Rc::clone(texture), shader, transform))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_scale_normalises_diagonal() {
        assert_eq!(model_scale(2.0, 1.0), 0.5);
        assert!((model_scale(3f32.sqrt(), 3f32.sqrt()) - 1.0).abs() < 1e-6);
        assert_eq!(model_scale(0.0, 6.0), 1.0);
    }

    #[test]
    fn missing_face_table_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let t = load_face_table(&dir.path().join("blocks.toml")).unwrap();
        assert_eq!(t, FaceTextureTable::default());
    }

    #[test]
    fn face_table_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("blocks.toml");
        std::fs::write(&p, "[[blocks]]\nname = \"stone\"\nall = 5\n").unwrap();
        let t = load_face_table(&p).unwrap();
        assert_eq!(t.tile(blockview_blocks::BlockType::Stone, 0), Some(5));
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use blockview_mesh_cpu::{FaceCulling, MeshOptions};
use blockview_render_raylib::TextureFilterMode;
use blockview_world::SceneConfig;
use serde::Deserialize;
use thiserror::Error;

use crate::cli::Cli;
use crate::input::Controls;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// `assets/blockview.toml`. Every section and key is optional.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub controls: Controls,
    #[serde(default)]
    pub light: LightConfig,
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub mesh: MeshConfig,
    #[serde(default)]
    pub model: ModelConfig,
}

fn default_width() -> i32 {
    1024
}
fn default_height() -> i32 {
    768
}
fn default_title() -> String {
    "blockview".into()
}
fn default_true() -> bool {
    true
}
fn default_clear_color() -> [u8; 3] {
    [64, 64, 64]
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub vsync: bool,
    #[serde(default = "default_true")]
    pub msaa: bool,
    /// 0 leaves the frame rate uncapped.
    #[serde(default)]
    pub target_fps: u32,
    #[serde(default = "default_clear_color")]
    pub clear_color: [u8; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            title: default_title(),
            vsync: false,
            msaa: true,
            target_fps: 0,
            clear_color: default_clear_color(),
        }
    }
}

fn default_camera_pos() -> [f32; 3] {
    [-6.0, 22.0, -6.0]
}
fn default_fov() -> f32 {
    45.0
}
fn default_near() -> f32 {
    blockview_geom::DEFAULT_NEAR
}
fn default_far() -> f32 {
    blockview_geom::DEFAULT_FAR
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CameraConfig {
    #[serde(default = "default_camera_pos")]
    pub position: [f32; 3],
    /// Initial aim point; the scene centre when absent.
    #[serde(default)]
    pub target: Option<[f32; 3]>,
    /// Vertical field of view in degrees.
    #[serde(default = "default_fov")]
    pub fov: f32,
    #[serde(default = "default_near")]
    pub near: f32,
    #[serde(default = "default_far")]
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: default_camera_pos(),
            target: None,
            fov: default_fov(),
            near: default_near(),
            far: default_far(),
        }
    }
}

fn default_light_pos() -> [f32; 3] {
    [3.0, 2.0, 3.0]
}
fn default_light_color() -> [f32; 3] {
    [1.0, 1.0, 1.0]
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LightConfig {
    #[serde(default = "default_light_pos")]
    pub position: [f32; 3],
    #[serde(default = "default_light_color")]
    pub color: [f32; 3],
    /// Keep the light at the eye every frame.
    #[serde(default = "default_true")]
    pub follow_camera: bool,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            position: default_light_pos(),
            color: default_light_color(),
            follow_camera: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CullingMode {
    #[default]
    None,
    Neighbors,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct MeshConfig {
    #[serde(default)]
    pub culling: CullingMode,
    /// Trilinear filtering instead of nearest texel.
    #[serde(default)]
    pub linear_filtering: bool,
}

impl MeshConfig {
    pub fn options(&self) -> MeshOptions {
        MeshOptions {
            culling: match self.culling {
                CullingMode::None => FaceCulling::None,
                CullingMode::Neighbors => FaceCulling::Neighbors,
            },
        }
    }

    pub fn filter(&self) -> TextureFilterMode {
        if self.linear_filtering {
            TextureFilterMode::Linear
        } else {
            TextureFilterMode::Point
        }
    }
}

fn default_model_size() -> f32 {
    6.0
}
fn default_model_hover() -> f32 {
    6.0
}

/// Placement of the optional `--file` model.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ModelConfig {
    /// Bounding-box diagonal after auto-scaling, in world units.
    #[serde(default = "default_model_size")]
    pub size: f32,
    /// Height above the top of the blocks.
    #[serde(default = "default_model_hover")]
    pub hover: f32,
    #[serde(default = "default_true")]
    pub spin: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            size: default_model_size(),
            hover: default_model_hover(),
            spin: true,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&s).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults when the file does not exist; a present but broken file is
    /// still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!(target: "assets", "no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let cfg = Self::load(path)?;
        log::info!(target: "assets", "loaded config {}", path.display());
        Ok(cfg)
    }

    /// Command-line values win over the file.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(w) = cli.width {
            self.window.width = w;
        }
        if let Some(h) = cli.height {
            self.window.height = h;
        }
        if cli.vsync {
            self.window.vsync = true;
        }
        if let Some(seed) = cli.seed {
            self.scene.terrain.seed = seed;
        }
    }

    pub fn aspect(&self) -> f32 {
        self.window.width.max(1) as f32 / self.window.height.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockview_world::TerrainMode;
    use clap::Parser;

    #[test]
    fn empty_toml_is_default() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.window.width, 1024);
        assert_eq!(cfg.window.height, 768);
        assert_eq!(cfg.camera.fov, 45.0);
        assert_eq!(cfg.light.color, [1.0, 1.0, 1.0]);
        assert_eq!(cfg.mesh.options(), MeshOptions::default());
        assert_eq!(cfg.mesh.filter(), TextureFilterMode::Point);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [window]
            width = 640
            [mesh]
            culling = "neighbors"
            linear_filtering = true
            [scene.terrain]
            mode = "flat"
            [controls]
            move_speed = 2.5
            "#,
        )
        .unwrap();
        assert_eq!(cfg.window.width, 640);
        assert_eq!(cfg.window.height, 768);
        assert_eq!(cfg.mesh.options().culling, FaceCulling::Neighbors);
        assert_eq!(cfg.mesh.filter(), TextureFilterMode::Linear);
        assert_eq!(cfg.scene.terrain.mode, TerrainMode::Flat);
        assert_eq!(cfg.scene.blocks_x, 4);
        assert_eq!(cfg.controls.move_speed, 2.5);
        assert_eq!(cfg.controls.fast_multiplier, Controls::default().fast_multiplier);
    }

    #[test]
    fn cli_overrides_config() {
        let mut cfg = AppConfig::from_toml_str("[window]\nwidth = 640\nheight = 480\n").unwrap();
        let cli = Cli::try_parse_from(["blockview", "-w", "800", "--seed", "7", "--vsync"]).unwrap();
        cfg.apply_cli(&cli);
        assert_eq!(cfg.window.width, 800);
        assert_eq!(cfg.window.height, 480);
        assert!(cfg.window.vsync);
        assert_eq!(cfg.scene.terrain.seed, 7);
    }

    #[test]
    fn missing_file_defaults_and_bad_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("none.toml");
        assert_eq!(AppConfig::load_or_default(&missing).unwrap(), AppConfig::default());

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[window]\nwidth = \"wide\"\n").unwrap();
        assert!(matches!(
            AppConfig::load_or_default(&bad),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(AppConfig::load(&missing), Err(ConfigError::Io { .. })));
    }
}

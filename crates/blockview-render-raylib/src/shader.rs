use std::path::{Path, PathBuf};

use blockview_geom::{Camera, FrameMatrices, Light, Mat4, Vec3};
use raylib::prelude::*;
use thiserror::Error;

use crate::conv::mat4_to_rl;

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("shader source not found: {0}")]
    Missing(PathBuf),
    #[error("shader {vs} + {fs} failed to compile or link")]
    Link { vs: PathBuf, fs: PathBuf },
}

/// Cached uniform locations of the block shader; `-1` when the program
/// optimised a uniform away.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UniformLocations {
    pub mvp: i32,
    pub model: i32,
    pub view: i32,
    pub camera_pos: i32,
    pub light_pos: i32,
    pub light_col: i32,
    pub tex_cube: i32,
}

impl UniformLocations {
    pub const NAMES: [&'static str; 7] =
        ["MVP", "M", "V", "Camera_Pos", "Light_Pos", "Light_Col", "Tex_Cube"];

    fn resolve(shader: &WeakShader) -> Self {
        let [mvp, model, view, camera_pos, light_pos, light_col, tex_cube] =
            Self::NAMES.map(|name| shader.get_shader_location(name));
        Self {
            mvp,
            model,
            view,
            camera_pos,
            light_pos,
            light_col,
            tex_cube,
        }
    }

    fn as_array(&self) -> [i32; 7] {
        [
            self.mvp,
            self.model,
            self.view,
            self.camera_pos,
            self.light_pos,
            self.light_col,
            self.tex_cube,
        ]
    }
}

pub struct ShaderProgram {
    pub shader: WeakShader,
    locs: UniformLocations,
}

impl ShaderProgram {
    pub const VS: &'static str = "assets/shaders/block.vs";
    pub const FS: &'static str = "assets/shaders/block.fs";

    pub fn load(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        vs: &Path,
        fs: &Path,
    ) -> Result<Self, ShaderError> {
        for p in [vs, fs] {
            if !p.is_file() {
                return Err(ShaderError::Missing(p.to_path_buf()));
            }
        }
        let shader_strong = rl.load_shader(
            thread,
            Some(vs.to_string_lossy().as_ref()),
            Some(fs.to_string_lossy().as_ref()),
        );
        let shader = unsafe { shader_strong.make_weak() };
        // Raylib falls back to its default program when compile/link fails.
        let raw: &raylib::ffi::Shader = shader.as_ref();
        if raw.id == unsafe { raylib::ffi::rlGetShaderIdDefault() } {
            return Err(ShaderError::Link {
                vs: vs.to_path_buf(),
                fs: fs.to_path_buf(),
            });
        }
        let locs = UniformLocations::resolve(&shader);
        for (name, loc) in UniformLocations::NAMES.iter().zip(locs.as_array()) {
            if loc < 0 {
                log::warn!(target: "assets", "uniform {name} not active in {}", fs.display());
            }
        }
        log::info!(target: "assets", "loaded shader {} + {}", vs.display(), fs.display());
        Ok(Self { shader, locs })
    }

    pub fn load_with_base(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        base: &Path,
    ) -> Result<Self, ShaderError> {
        Self::load(rl, thread, &base.join(Self::VS), &base.join(Self::FS))
    }

    #[inline]
    pub fn locations(&self) -> &UniformLocations {
        &self.locs
    }

    /// Points the model's first material at this program.
    pub fn apply_to(&self, model: &mut Model) {
        if let Some(mat) = model.materials_mut().get_mut(0) {
            let dest = mat.shader_mut();
            let dest_ptr: *mut raylib::ffi::Shader = dest.as_mut();
            let src_ptr: *const raylib::ffi::Shader = self.shader.as_ref();
            unsafe {
                std::ptr::copy_nonoverlapping(src_ptr, dest_ptr, 1);
            }
        }
    }

    /// Uploads everything one instance draw needs.
    pub fn upload_instance(
        &mut self,
        fm: &FrameMatrices,
        camera: &Camera,
        light: &Light,
        tex_unit: i32,
    ) {
        let l = self.locs;
        self.set_vec3(l.camera_pos, camera.position());
        self.set_vec3(l.light_pos, light.position);
        self.set_vec3(l.light_col, light.color);
        if l.tex_cube >= 0 {
            self.shader.set_shader_value(l.tex_cube, tex_unit);
        }
        self.set_mat4(l.model, &fm.model);
        self.set_mat4(l.view, &fm.view);
        self.set_mat4(l.mvp, &fm.mvp);
    }

    fn set_vec3(&mut self, loc: i32, v: Vec3) {
        if loc >= 0 {
            self.shader.set_shader_value(loc, v.to_array());
        }
    }

    fn set_mat4(&mut self, loc: i32, m: &Mat4) {
        if loc >= 0 {
            self.shader.set_shader_value_matrix(loc, mat4_to_rl(m));
        }
    }
}

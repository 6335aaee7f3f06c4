use std::rc::Rc;

use blockview_blocks::FaceTextureTable;
use blockview_chunk::VoxelGrid;
use blockview_geom::{Aabb, Camera, FrameMatrices, Light, Transform};
use blockview_mesh_cpu::{MeshOptions, build_block_mesh_cpu};
use raylib::prelude::*;

use crate::mesh::GpuMesh;
use crate::shader::ShaderProgram;
use crate::texture::Texture;

fn draw(gpu: &GpuMesh, texture: &Texture, d3: &mut impl RaylibDraw3D) {
    texture.bind();
    d3.draw_model(&gpu.model, Vector3::zero(), 1.0, Color::WHITE);
}

fn prepare(gpu: &mut GpuMesh, texture: &Texture, shader: &ShaderProgram) {
    shader.apply_to(&mut gpu.model);
    texture.apply_to(&mut gpu.model);
}

/// A static mesh (OBJ model) with its own transform.
pub struct Instance {
    gpu: GpuMesh,
    texture: Rc<Texture>,
    pub transform: Transform,
}

impl Instance {
    pub fn new(
        mut gpu: GpuMesh,
        texture: Rc<Texture>,
        shader: &ShaderProgram,
        transform: Transform,
    ) -> Self {
        prepare(&mut gpu, &texture, shader);
        Self {
            gpu,
            texture,
            transform,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.gpu.vertex_count
    }

    pub fn set_uniforms(&self, shader: &mut ShaderProgram, camera: &Camera, light: &Light) {
        let fm = FrameMatrices::compute(&self.transform, camera);
        shader.upload_instance(&fm, camera, light, self.texture.unit());
    }

    pub fn render(&self, d3: &mut impl RaylibDraw3D) {
        draw(&self.gpu, &self.texture, d3);
    }
}

/// One 16³ voxel block: the grid it owns plus the GPU mesh built from it.
pub struct BlockInstance {
    grid: VoxelGrid,
    gpu: Option<GpuMesh>,
    bbox: Option<Aabb>,
    built_revision: Option<u64>,
    texture: Rc<Texture>,
    options: MeshOptions,
    pub transform: Transform,
}

impl BlockInstance {
    /// No GPU mesh exists until the first `generate_block`.
    pub fn new(grid: VoxelGrid, texture: Rc<Texture>, transform: Transform, options: MeshOptions) -> Self {
        Self {
            grid,
            gpu: None,
            bbox: None,
            built_revision: None,
            texture,
            options,
            transform,
        }
    }

    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Edits mark the block stale; call `generate_block` before the next draw.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut VoxelGrid {
        &mut self.grid
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.built_revision != Some(self.grid.revision())
    }

    #[inline]
    pub fn has_mesh(&self) -> bool {
        self.gpu.is_some()
    }

    pub fn vertex_count(&self) -> usize {
        self.gpu.as_ref().map_or(0, |g| g.vertex_count)
    }

    /// Local-space bounds of the current mesh.
    pub fn bbox(&self) -> Option<Aabb> {
        self.bbox
    }

    /// Rebuilds the mesh from the grid. The new mesh is built and uploaded
    /// before the old one is released; an empty grid leaves no mesh.
    pub fn generate_block(
        &mut self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        shader: &ShaderProgram,
        table: &FaceTextureTable,
    ) {
        let cpu = build_block_mesh_cpu(&self.grid, table, self.options);
        let next = if cpu.mesh.is_empty() {
            None
        } else {
            let uploaded = GpuMesh::from_build(rl, thread, &cpu.mesh);
            if uploaded.is_none() {
                log::error!(target: "mesh", "block mesh upload failed ({} vertices)", cpu.mesh.vertex_count());
            }
            uploaded.map(|mut gpu| {
                prepare(&mut gpu, &self.texture, shader);
                gpu
            })
        };
        log::debug!(
            target: "mesh",
            "block at {:?}: {} vertices",
            self.transform.position,
            cpu.mesh.vertex_count()
        );
        self.gpu = next;
        self.bbox = cpu.bbox;
        self.built_revision = Some(self.grid.revision());
    }

    pub fn set_uniforms(&self, shader: &mut ShaderProgram, camera: &Camera, light: &Light) {
        if self.gpu.is_none() {
            return;
        }
        let fm = FrameMatrices::compute(&self.transform, camera);
        shader.upload_instance(&fm, camera, light, self.texture.unit());
    }

    /// No-op while there is no mesh.
    pub fn render(&self, d3: &mut impl RaylibDraw3D) {
        if let Some(gpu) = &self.gpu {
            draw(gpu, &self.texture, d3);
        }
    }
}

//! CPU block mesher: turns a voxel grid into an unindexed, atlas-textured
//! triangle list (engine-only, no GPU dependency).
#![forbid(unsafe_code)]

pub mod atlas;
pub mod constants;
pub mod face;
pub mod mesh_build;

use blockview_blocks::FaceTextureTable;
use blockview_chunk::VoxelGrid;
use blockview_geom::{Aabb, Vec3};

pub use constants::{VERTS_PER_FACE, VERTS_PER_VOXEL};
pub use face::Face;
pub use mesh_build::MeshBuild;

/// Which faces of an occupied voxel get emitted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum FaceCulling {
    /// All six faces of every occupied voxel.
    #[default]
    None,
    /// Skip a face when the adjacent cell in the same grid is occupied.
    /// Faces on the grid boundary are always kept.
    Neighbors,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MeshOptions {
    pub culling: FaceCulling,
}

/// Mesh for one block plus the bounds of every emitted vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BlockMeshCPU {
    pub bbox: Option<Aabb>,
    pub mesh: MeshBuild,
}

/// Emits every face of every occupied voxel.
pub fn build_block_mesh(grid: &VoxelGrid, table: &FaceTextureTable) -> MeshBuild {
    build_block_mesh_with(grid, table, MeshOptions::default())
}

pub fn build_block_mesh_with(
    grid: &VoxelGrid,
    table: &FaceTextureTable,
    opts: MeshOptions,
) -> MeshBuild {
    let mut mb = MeshBuild::default();
    build_block_mesh_into(grid, table, opts, &mut mb);
    mb
}

/// Rebuilds `out` in place, reusing its allocations.
pub fn build_block_mesh_into(
    grid: &VoxelGrid,
    table: &FaceTextureTable,
    opts: MeshOptions,
    out: &mut MeshBuild,
) {
    out.clear_keep_capacity();
    if opts.culling == FaceCulling::None {
        out.reserve_faces(grid.occupied_count() * constants::FACES_PER_VOXEL);
    }
    // iter_occupied walks z, then y, then x: the storage order.
    for (x, y, z, ty) in grid.iter_occupied() {
        let Some(tiles) = table.tiles(ty) else {
            continue;
        };
        let offset = Vec3::new(x as f32, y as f32, z as f32);
        for face in Face::ALL {
            if opts.culling == FaceCulling::Neighbors && neighbor_occupied(grid, x, y, z, face) {
                continue;
            }
            out.add_face(face, tiles[face.index()], offset);
        }
    }
    log::trace!(
        target: "mesh",
        "block mesh: {} voxels -> {} vertices ({:?})",
        grid.occupied_count(),
        out.vertex_count(),
        opts.culling
    );
}

pub fn build_block_mesh_cpu(
    grid: &VoxelGrid,
    table: &FaceTextureTable,
    opts: MeshOptions,
) -> BlockMeshCPU {
    let mesh = build_block_mesh_with(grid, table, opts);
    BlockMeshCPU {
        bbox: mesh.bounds(),
        mesh,
    }
}

#[inline]
fn neighbor_occupied(grid: &VoxelGrid, x: usize, y: usize, z: usize, face: Face) -> bool {
    let (dx, dy, dz) = face.delta();
    let (nx, ny, nz) = (x as i32 + dx, y as i32 + dy, z as i32 + dz);
    VoxelGrid::contains(nx, ny, nz) && grid.is_occupied(nx as usize, ny as usize, nz as usize)
}

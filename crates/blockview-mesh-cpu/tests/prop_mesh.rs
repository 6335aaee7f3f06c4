use blockview_blocks::{BlockType, FaceTextureTable};
use blockview_chunk::{BLOCK_DEPTH, BLOCK_HEIGHT, BLOCK_WIDTH, VoxelGrid};
use blockview_mesh_cpu::{
    FaceCulling, MeshOptions, VERTS_PER_FACE, VERTS_PER_VOXEL, build_block_mesh,
    build_block_mesh_with,
};
use proptest::prelude::*;

fn voxel() -> impl Strategy<Value = (usize, usize, usize, BlockType)> {
    (
        0..BLOCK_WIDTH,
        0..BLOCK_HEIGHT,
        0..BLOCK_DEPTH,
        prop::sample::select(BlockType::SOLID.to_vec()),
    )
}

proptest! {
    #[test]
    fn vertex_count_is_36_per_occupied_voxel(cells in prop::collection::vec(voxel(), 0..64)) {
        let mut g = VoxelGrid::new();
        for (x, y, z, ty) in cells {
            g.set_voxel(x, y, z, ty);
        }
        let mb = build_block_mesh(&g, &FaceTextureTable::default());
        prop_assert_eq!(mb.vertex_count(), g.occupied_count() * VERTS_PER_VOXEL);
        prop_assert_eq!(mb.uv.len() / 2, mb.vertex_count());
        prop_assert_eq!(mb.norm.len() / 3, mb.vertex_count());
        for &c in &mb.uv {
            prop_assert!((0.0..=1.0).contains(&c));
        }
    }

    #[test]
    fn culling_never_adds_faces(cells in prop::collection::vec(voxel(), 0..64)) {
        let mut g = VoxelGrid::new();
        for (x, y, z, ty) in cells {
            g.set_voxel(x, y, z, ty);
        }
        let t = FaceTextureTable::default();
        let full = build_block_mesh(&g, &t);
        let culled = build_block_mesh_with(&g, &t, MeshOptions { culling: FaceCulling::Neighbors });
        prop_assert!(culled.vertex_count() <= full.vertex_count());
        prop_assert_eq!(culled.vertex_count() % VERTS_PER_FACE, 0);
        if let (Some(a), Some(b)) = (full.bounds(), culled.bounds()) {
            prop_assert_eq!(a, b);
        }
    }
}

use blockview_blocks::{BlockType, FaceTextureTable};
use blockview_chunk::{BLOCK_DEPTH, BLOCK_HEIGHT, BLOCK_WIDTH, VoxelGrid};
use blockview_mesh_cpu::{
    FaceCulling, MeshBuild, MeshOptions, build_block_mesh_into, build_block_mesh_with,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn terrain_grid() -> VoxelGrid {
    let mut g = VoxelGrid::new();
    for z in 0..BLOCK_DEPTH {
        for x in 0..BLOCK_WIDTH {
            let h = 6 + (x + z) % 6;
            for y in 0..h.min(BLOCK_HEIGHT) {
                let ty = if y + 1 == h {
                    BlockType::Topsoil
                } else if y + 4 >= h {
                    BlockType::Dirt
                } else {
                    BlockType::Stone
                };
                g.set_voxel(x, y, z, ty);
            }
        }
    }
    g
}

fn bench_block_mesh(c: &mut Criterion) {
    let grid = terrain_grid();
    let table = FaceTextureTable::default();

    let mut group = c.benchmark_group("block_mesh");
    group.bench_function("all_faces", |b| {
        b.iter(|| build_block_mesh_with(black_box(&grid), &table, MeshOptions::default()))
    });
    group.bench_function("neighbor_culled", |b| {
        let opts = MeshOptions {
            culling: FaceCulling::Neighbors,
        };
        b.iter(|| build_block_mesh_with(black_box(&grid), &table, opts))
    });
    group.bench_function("rebuild_reuse", |b| {
        let mut mb = MeshBuild::default();
        b.iter(|| {
            build_block_mesh_into(black_box(&grid), &table, MeshOptions::default(), &mut mb);
            black_box(mb.vertex_count())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_block_mesh);
criterion_main!(benches);

use blockview_chunk::BLOCK_HEIGHT;
use blockview_world::{TerrainGen, TerrainParams};
use proptest::prelude::*;

proptest! {
    #[test]
    fn height_stays_in_block(seed in any::<i32>(), x in -5000i32..5000, z in -5000i32..5000,
                             amp in 0.0f32..40.0) {
        let tg = TerrainGen::new(TerrainParams { seed, amplitude: amp, ..TerrainParams::default() });
        let h = tg.height_at(x, z);
        prop_assert!((1..=BLOCK_HEIGHT).contains(&h));
    }
}

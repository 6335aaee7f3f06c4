use std::io::Write;

use blockview_blocks::{BlockType, BlocksConfigError, FaceTextureTable};

#[test]
fn default_table_matches_atlas_layout() {
    let t = FaceTextureTable::default();
    assert_eq!(t.tiles(BlockType::Topsoil), Some(&[0, 1, 2, 2, 2, 2]));
    assert_eq!(t.tiles(BlockType::Dirt), Some(&[1; 6]));
    assert_eq!(t.tiles(BlockType::Stone), Some(&[16; 6]));
    assert_eq!(t.tiles(BlockType::Empty), None);
    assert_eq!(t.tile(BlockType::Topsoil, 0), Some(0));
    assert_eq!(t.tile(BlockType::Topsoil, 1), Some(1));
}

#[test]
fn empty_config_keeps_defaults() {
    let t = FaceTextureTable::from_toml_str("").unwrap();
    assert_eq!(t, FaceTextureTable::default());
}

#[test]
fn role_overrides_apply_in_order() {
    let src = r#"
        [[blocks]]
        name = "dirt"
        all = 5
        side = 6
        top = 7

        [[blocks]]
        name = "topsoil"
        tiles = [10, 11, 12, 13, 14, 15]
        top = 3
    "#;
    let t = FaceTextureTable::from_toml_str(src).unwrap();
    assert_eq!(t.tiles(BlockType::Dirt), Some(&[7, 5, 6, 6, 6, 6]));
    // `tiles` wins over the role fields.
    assert_eq!(t.tiles(BlockType::Topsoil), Some(&[10, 11, 12, 13, 14, 15]));
    assert_eq!(t.tiles(BlockType::Stone), Some(&[16; 6]));
}

#[test]
fn unknown_block_is_rejected() {
    let err = FaceTextureTable::from_toml_str("[[blocks]]\nname = \"lava\"\nall = 3\n").unwrap_err();
    assert!(matches!(err, BlocksConfigError::UnknownBlock(ref n) if n == "lava"));
}

#[test]
fn empty_block_cannot_be_textured() {
    let err = FaceTextureTable::from_toml_str("[[blocks]]\nname = \"air\"\nall = 3\n").unwrap_err();
    assert!(matches!(err, BlocksConfigError::EmptyBlock(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = FaceTextureTable::from_toml_str("[[blocks]\nname=").unwrap_err();
    assert!(matches!(err, BlocksConfigError::Parse(_)));
}

#[test]
fn load_reads_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "[[blocks]]\nname = \"stone\"\nbottom = 18").unwrap();
    let t = FaceTextureTable::load(f.path()).unwrap();
    assert_eq!(t.tiles(BlockType::Stone), Some(&[16, 18, 16, 16, 16, 16]));
}

#[test]
fn missing_file_is_io_error() {
    let err = FaceTextureTable::load("/definitely/not/here/blocks.toml").unwrap_err();
    assert!(matches!(err, BlocksConfigError::Io(_)));
}

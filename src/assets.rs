use std::path::{Path, PathBuf};

const MARKER: &str = "assets/shaders/block.vs";
const ENV_VAR: &str = "BLOCKVIEW_ASSETS";

/// Finds the directory that holds `assets/`.
///
/// Order: `--assets`, `$BLOCKVIEW_ASSETS`, then the working directory, the
/// executable's directory and the crate root with up to four parents each.
/// Falls back to the working directory.
pub fn resolve_assets_root(cli: Option<&str>) -> PathBuf {
    if let Some(p) = cli {
        match existing(PathBuf::from(p)) {
            Some(pb) => return pb,
            None => log::warn!(target: "assets", "--assets {p} does not exist, searching"),
        }
    }
    if let Some(pb) = std::env::var_os(ENV_VAR).and_then(|p| existing(PathBuf::from(p))) {
        return pb;
    }

    let cwd = std::env::current_dir().ok();
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    let manifest = Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")));

    [cwd.clone(), exe_dir, manifest]
        .into_iter()
        .flatten()
        .find_map(|base| search_up(&base, 5))
        .or(cwd)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn existing(p: PathBuf) -> Option<PathBuf> {
    p.exists().then_some(p)
}

/// First of `base` and its parents (at most `depth` levels) that holds the
/// shader marker.
fn search_up(base: &Path, depth: usize) -> Option<PathBuf> {
    base.ancestors()
        .take(depth)
        .find(|dir| dir.join(MARKER).is_file())
        .map(Path::to_path_buf)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join("assets/blockview.toml")
}

pub fn blocks_path(root: &Path) -> PathBuf {
    root.join("assets/voxels/blocks.toml")
}

pub fn default_texture_path(root: &Path) -> PathBuf {
    root.join("assets/textures/texture.png")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_climbs_to_marker() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("assets/shaders")).unwrap();
        std::fs::write(dir.path().join(MARKER), "").unwrap();
        let nested = dir.path().join("target/debug");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(search_up(&nested, 5).as_deref(), Some(dir.path()));
        assert_eq!(search_up(&nested, 2), None);
    }

    #[test]
    fn existing_cli_dir_wins() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().to_string_lossy().to_string();
        assert_eq!(resolve_assets_root(Some(&p)), dir.path());
    }

    #[test]
    fn asset_paths() {
        let root = Path::new("/x");
        assert_eq!(blocks_path(root), PathBuf::from("/x/assets/voxels/blocks.toml"));
        assert_eq!(config_path(root), PathBuf::from("/x/assets/blockview.toml"));
        assert_eq!(
            default_texture_path(root),
            PathBuf::from("/x/assets/textures/texture.png")
        );
    }
}

//! Places the workspace `config.toml` beside the host binary, where
//! `shared::config::load_config` looks for it.

use std::path::{Path, PathBuf};

/// `target/<profile>` for the current build, found from OUT_DIR
/// (`target/<profile>/build/backend-<hash>/out`).
fn profile_dir() -> Option<PathBuf> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR")?);
    let profile = std::env::var("PROFILE").ok()?;
    out_dir
        .ancestors()
        .find(|dir| dir.file_name().map_or(false, |name| name == profile.as_str()))
        .map(Path::to_path_buf)
}

fn main() {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let config = manifest_dir.join("../../config.toml");
    println!("cargo:rerun-if-changed={}", config.display());

    let Some(dest_dir) = profile_dir() else {
        println!("cargo:warning=target profile dir not found, config.toml not copied");
        return;
    };

    if !config.exists() {
        println!("cargo:warning=no workspace config.toml, the host will use its embedded defaults");
        return;
    }

    if let Err(e) = std::fs::copy(&config, dest_dir.join("config.toml")) {
        panic!("copying config.toml into {}: {}", dest_dir.display(), e);
    }
}

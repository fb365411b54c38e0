use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Built frontend (trunk output)
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// The `{ "platforms": [...] }` document served at /data/platforms.json
    pub path: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[catalog]
path = "data/platforms.json"
"#;

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(dir) = exe_dir() {
        let config_path = dir.join("config.toml");

        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&contents)?;
            return Ok(config);
        } else {
            tracing::warn!("config.toml not found at: {}", config_path.display());
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Resolves a configured path.
///
/// Absolute paths are used as is. Relative paths prefer an existing entry
/// next to the executable, otherwise they stay relative to the working directory.
pub fn resolve_path(configured: &str) -> PathBuf {
    resolve_against(configured, exe_dir().as_deref())
}

fn resolve_against(configured: &str, base: Option<&Path>) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Some(base) = base {
        let candidate = base.join(path);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(configured)
}

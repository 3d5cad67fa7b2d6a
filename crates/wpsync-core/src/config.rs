use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default manifest file name, relative to the working directory.
pub const DEFAULT_MANIFEST_PATH: &str = "wallpapers.json";
/// Default asset directory, relative to the working directory.
pub const DEFAULT_ASSET_DIR: &str = "wallpapers";

/// HTTP client settings (optional `[http]` section in config.toml).
/// Unset timeouts fall through to libcurl's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Whole-transfer timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Custom `User-Agent` header.
    #[serde(default)]
    pub user_agent: Option<String>,
    /// Maximum redirects to follow per request.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: u32,
}

fn default_max_redirects() -> u32 {
    10
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: None,
            timeout_secs: None,
            user_agent: None,
            max_redirects: default_max_redirects(),
        }
    }
}

/// Global configuration loaded from `~/.config/wpsync/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Manifest to read and rewrite.
    pub manifest_path: PathBuf,
    /// Directory downloaded assets are written to; also the prefix of rewritten `url` values.
    pub asset_dir: PathBuf,
    #[serde(default)]
    pub http: HttpConfig,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            manifest_path: PathBuf::from(DEFAULT_MANIFEST_PATH),
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            http: HttpConfig::default(),
        }
    }
}

impl SyncConfig {
    /// Applies command-line overrides on top of the loaded file values.
    pub fn with_overrides(mut self, manifest: Option<PathBuf>, asset_dir: Option<PathBuf>) -> Self {
        if let Some(m) = manifest {
            self.manifest_path = m;
        }
        if let Some(d) = asset_dir {
            self.asset_dir = d;
        }
        self
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wpsync")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SyncConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SyncConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SyncConfig = toml::from_str(&data)?;
    Ok(cfg)
}

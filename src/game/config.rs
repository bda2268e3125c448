// Application configuration

use crate::engine::renderer::ViewportConfig;
use std::path::{Path, PathBuf};

/// Environment variable overriding the asset root
pub const ASSETS_ENV_VAR: &str = "SCROLL_ANIMATOR_ASSETS";

const DEFAULT_ASSET_ROOT: &str = "assets";
const DEFAULT_MAP_FILE: &str = "map.csv";

/// Startup settings for the animator
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    /// Logical screen size in world units
    pub screen_width: u32,
    pub screen_height: u32,
    /// Edge length of one map cell in world units
    pub tile_size: f32,
    /// Directory holding `images/` and the map file
    pub asset_root: PathBuf,
    /// Map file name, relative to `asset_root`
    pub map_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Scroll Animator".to_string(),
            screen_width: 1600,
            screen_height: 900,
            tile_size: 128.0,
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            map_file: PathBuf::from(DEFAULT_MAP_FILE),
        }
    }
}

impl AppConfig {
    /// Defaults, with the asset root taken from the environment if set
    pub fn from_env() -> Self {
        let asset_root = std::env::var_os(ASSETS_ENV_VAR).map(PathBuf::from);
        Self::default().with_asset_root(asset_root)
    }

    fn with_asset_root(mut self, asset_root: Option<PathBuf>) -> Self {
        if let Some(root) = asset_root.filter(|root| !root.as_os_str().is_empty()) {
            self.asset_root = root;
        }
        self
    }

    pub fn map_path(&self) -> PathBuf {
        self.asset_root.join(&self.map_file)
    }

    pub fn asset_root(&self) -> &Path {
        &self.asset_root
    }

    /// Scroll margins for this screen size
    pub fn viewport(&self) -> ViewportConfig {
        ViewportConfig {
            screen_width: self.screen_width as f32,
            screen_height: self.screen_height as f32,
            ..ViewportConfig::default()
        }
    }
}

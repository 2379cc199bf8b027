//! Board configuration loaded with figment
//!
//! Sources, later ones override earlier ones:
//! 1. Defaults
//! 2. `bookmarks.toml`, `bookmarks.yaml`, `bookmarks.json` in the working directory
//! 3. `BOOKMARKS_` environment variables (e.g. `BOOKMARKS_STORE_DIR`)

use crate::error::Result;
use crate::persist::DEFAULT_KEY;
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base name of the configuration files
pub const CONFIG_FILE_STEM: &str = "bookmarks";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "BOOKMARKS_";

/// Where the board is persisted and who changes it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Directory holding snapshot files
    pub store_dir: PathBuf,
    /// Snapshot key inside the directory
    pub store_key: String,
    /// Actor recorded on activity log entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(".bookmarks"),
            store_key: DEFAULT_KEY.to_string(),
            actor: None,
        }
    }
}

impl BoardConfig {
    /// Load configuration from the working directory and the environment
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration files from `dir`, then the environment
    pub fn load_from(dir: &Path) -> Result<Self> {
        let config: Self = Self::figment(dir).extract()?;
        debug!(
            store_dir = %config.store_dir.display(),
            store_key = %config.store_key,
            "loaded board configuration"
        );
        Ok(config)
    }

    fn figment(dir: &Path) -> Figment {
        let file = |ext: &str| dir.join(format!("{CONFIG_FILE_STEM}.{ext}"));

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(file("toml")))
            .merge(Yaml::file(file("yaml")))
            .merge(Json::file(file("json")))
            .merge(Env::prefixed(ENV_PREFIX))
    }
}

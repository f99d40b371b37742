use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cost::{clamp_servings, DEFAULT_SERVINGS};
use crate::error::Result;

const APP_DIR: &str = "chef_cost";

/// User settings read from `config.toml`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the meal collection is stored.
    pub data_dir: Option<PathBuf>,

    /// Symbol printed before amounts.
    pub currency: String,

    /// Servings a new meal starts with in the editor.
    pub default_servings: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            currency: "$".to_string(),
            default_servings: DEFAULT_SERVINGS,
        }
    }
}

impl Config {
    /// Parse config text. An invalid serving default is raised to one.
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(text)?;
        if config.default_servings == 0 {
            log::warn!("default_servings must be at least 1; using 1");
            config.default_servings = clamp_servings(config.default_servings);
        }
        Ok(config)
    }

    /// Load from `path`, or from the user config dir when `path` is `None`.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path.map(Path::to_path_buf).or_else(default_config_path) else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(text) => {
                log::debug!("Loaded config from {:?}", path);
                Self::from_toml(&text)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Storage directory: CLI override, then config, then the platform data dir.
    pub fn resolve_data_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.data_dir.clone())
            .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from(".chef_cost"))
    }

    /// Format an amount with the configured currency symbol.
    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency, amount)
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

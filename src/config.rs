use crate::error::{OracleError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Registry file used when neither the config file nor `--registry` name one.
pub const DEFAULT_REGISTRY_PATH: &str = "pet_registry.json";

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".pet-oracle.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleConfig {
    #[serde(default = "default_registry")]
    pub registry: PathBuf,

    /// Fixed seed for the random source; entropy-seeded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_registry() -> PathBuf {
    PathBuf::from(DEFAULT_REGISTRY_PATH)
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            seed: None,
        }
    }
}

impl OracleConfig {
    /// Load `.pet-oracle.toml` from `dir`, falling back to defaults when it
    /// does not exist. A present but malformed file is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| {
            OracleError::Config(format!("Failed to read {}: {}", config_path.display(), e))
        })?;
        let config: OracleConfig = toml::from_str(&content)?;
        tracing::debug!(path = %config_path.display(), "Loaded config file");
        Ok(config)
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, registry: Option<PathBuf>, seed: Option<u64>) -> Self {
        if let Some(r) = registry {
            self.registry = r;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }
}

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "zigpkg.toml";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub driver: DriverConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct DriverConfig {
    #[serde(default)]
    pub operation: Operation,
    #[serde(default)]
    pub format: Format,
}

/// Which arithmetic shape the driver calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Overflow-checked update of a 32-bit seed
    #[default]
    Compute,
    /// Wrapping addition on an 8-bit number
    Add,
}

impl Operation {
    /// Name of the argument in usage messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Compute => "seed",
            Self::Add => "num",
        }
    }

    /// Largest accepted argument.
    pub fn max(self) -> u64 {
        match self {
            Self::Compute => u64::from(u32::MAX),
            Self::Add => u64::from(u8::MAX),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read config {}: {e}", path.display())))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse config: {e}")))?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    /// Load `path` if given, else the default file if it exists, else defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

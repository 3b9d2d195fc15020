//! Launcher configuration
//!
//! The payment address and the fee figures shown on the review step are
//! static values. They live here so they can be overridden from a YAML file
//! or the command line without touching the wizard.

use crate::error::LauncherError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Payment address shown in the payment popover
pub const DEFAULT_PAYMENT_ADDRESS: &str = "AX8UpKZ5yRDbpiYJj4VfHxqERVLwF1veKNRp7Cqa1pin";

/// Fee charged for a launch
pub const DEFAULT_LAUNCH_FEE: &str = "0.35 SOL";

/// Liquidity loaned to a launched token
pub const DEFAULT_LIQUIDITY: &str = "20 SOL";

/// Figure shown on the navigation supply badge
pub const DEFAULT_SOL_SUPPLY: &str = "220";

/// Static values displayed around the wizard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LauncherConfig {
    pub payment_address: String,
    pub launch_fee: String,
    pub liquidity: String,
    pub sol_supply: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            payment_address: DEFAULT_PAYMENT_ADDRESS.to_string(),
            launch_fee: DEFAULT_LAUNCH_FEE.to_string(),
            liquidity: DEFAULT_LIQUIDITY.to_string(),
            sol_supply: DEFAULT_SOL_SUPPLY.to_string(),
        }
    }
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

impl LauncherConfig {
    /// Default config file location (`<config_dir>/token-launcher/config.yaml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|dir| dir.join("token-launcher").join("config.yaml"))
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present, and the built-in defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<(Self, ConfigSource), LauncherError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(LauncherError::ConfigNotFound(path.display().to_string()));
            }
            let config = Self::load_from(path)?;
            return Ok((config, ConfigSource::File(path.to_path_buf())));
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                let config = Self::load_from(&path)?;
                Ok((config, ConfigSource::File(path)))
            }
            _ => Ok((Self::default(), ConfigSource::Defaults)),
        }
    }

    /// Load and validate configuration from a file
    pub fn load_from(path: &Path) -> Result<Self, LauncherError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from YAML; missing keys keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, LauncherError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Replace the payment address when an override is given
    pub fn with_payment_address(mut self, address: Option<String>) -> Self {
        if let Some(address) = address {
            self.payment_address = address;
        }
        self
    }

    /// Reject configurations the review step cannot display
    pub fn validate(&self) -> Result<(), LauncherError> {
        if self.payment_address.is_empty() {
            return Err(LauncherError::ConfigInvalid(
                "paymentAddress must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

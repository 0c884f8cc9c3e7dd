use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::identity::Identity;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Government identity not configured: {0}")]
    MissingGovernmentIdentity(String),
}

/// Environment variable consulted when the config file does not name a
/// government identity.
pub const GOVERNMENT_IDENTITY_VAR: &str = "GOVERNMENT_IDENTITY";

/// Configuration for the registry
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegistryConfig {
    /// The single identity allowed to verify or reject properties.
    /// Fixed for the lifetime of the deployment.
    pub government_identity: Option<String>,

    /// Path to the JSON ledger file used by the CLI.
    pub ledger_path: Option<PathBuf>,
}

impl RegistryConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: RegistryConfig = serde_yaml::from_str(&contents)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the government identity, checking the environment if
    /// the config file does not set one.
    pub fn government_identity(&self) -> Result<Identity, ConfigError> {
        if let Some(identity) = &self.government_identity {
            debug!("Using government identity from config");
            return Ok(Identity::from(identity.clone()));
        }

        match std::env::var(GOVERNMENT_IDENTITY_VAR) {
            Ok(identity) => {
                debug!("Using government identity from {}", GOVERNMENT_IDENTITY_VAR);
                Ok(Identity::from(identity))
            }
            Err(_) => Err(ConfigError::MissingGovernmentIdentity(format!(
                "set government_identity in the config file or the {} environment variable",
                GOVERNMENT_IDENTITY_VAR
            ))),
        }
    }

    /// Ledger file path, defaulting next to the working directory.
    pub fn ledger_path(&self) -> PathBuf {
        self.ledger_path
            .clone()
            .unwrap_or_else(|| PathBuf::from("ledger.json"))
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            government_identity: None,
            ledger_path: None,
        }
    }
}

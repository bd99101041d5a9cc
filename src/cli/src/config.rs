use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::WrapErr;
use cube_core::Scrambler;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Read when no `--config` is given, if it exists.
pub const DEFAULT_CONFIG: &str = "bld.toml";

/// Trainer configuration. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainerConfig {
    pub scramble_length: usize,
    /// Makes scrambles reproducible.
    pub seed: Option<u64>,
    /// Colored net output.
    pub color: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        TrainerConfig {
            scramble_length: Scrambler::DEFAULT_LENGTH,
            seed: None,
            color: true,
        }
    }
}

impl TrainerConfig {
    pub fn load(path: Option<&Path>) -> color_eyre::Result<TrainerConfig> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => {
                let path = PathBuf::from(DEFAULT_CONFIG);
                if !path.exists() {
                    debug!("No {DEFAULT_CONFIG}, using the default configuration");
                    return Ok(TrainerConfig::default());
                }
                path
            }
        };

        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read the configuration file {path:?}"))?;
        let config = toml::from_str::<TrainerConfig>(&text)
            .wrap_err_with(|| format!("Failed to parse the configuration file {path:?}"))?;

        info!("Loaded configuration from {path:?}");

        Ok(config)
    }
}

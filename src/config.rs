use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::CliError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Playout seed used when `--seed` is not given. Drawn at random if unset.
    pub seed: Option<u64>,
    pub max_plies: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            max_plies: 300,
        }
    }
}

impl Config {
    /// A missing file means defaults; a present but unreadable or malformed one is an error.
    pub fn load(path: Option<&PathBuf>) -> Result<Self, CliError> {
        let Some(p) = path else {
            return Ok(Self::default());
        };
        if !p.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(p).map_err(|source| CliError::ConfigRead {
            path: p.clone(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, CliError> {
        Ok(serde_yaml::from_str(content)?)
    }
}

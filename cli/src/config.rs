use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "plandoc.toml";
pub const API_URL_ENV: &str = "PLANDOC_API_URL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the planning API.
    pub api_url: String,
    /// Where `project-plan.pdf` is written unless `-o` says otherwise.
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: planner::DEFAULT_API_URL.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Read `explicit`, or `plandoc.toml` in the working directory if present,
    /// then apply the environment override.
    pub fn load(explicit: Option<&Path>) -> Result<Config> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if default.is_file() {
                    Self::from_file(default)?
                } else {
                    Config::default()
                }
            }
        };
        Ok(config.with_api_url_override(std::env::var(API_URL_ENV).ok()))
    }

    fn from_file(path: &Path) -> Result<Config> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("cannot read config '{}'", path.display()))?;
        let config = Self::parse(&source)
            .with_context(|| format!("invalid config '{}'", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn parse(source: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }
}

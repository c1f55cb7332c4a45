//! Layered configuration for the `hallen` command.
//!
//! Values are merged from (later wins):
//! 1. built-in defaults,
//! 2. `config.toml` in the platform configuration directory, if present,
//! 3. an explicitly requested file (TOML, YAML or JSON),
//! 4. `HALLEN_` environment variables, nested with `__`
//!    (e.g. `HALLEN_HTTP__TIMEOUT_SECS=5`).

pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use hallen_extract::DEFAULT_LOCATION;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

pub const ENV_PREFIX: &str = "HALLEN_";
pub const FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub http: HttpConfig,
    /// Branch whose room is shown when the item is tracked there.
    pub preferred_location: String,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            preferred_location: DEFAULT_LOCATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("hallen/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
        }
    }
}
impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Config {
    /// Load the configuration from every layer, including `file` if given.
    #[instrument]
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::from_figment(&Self::figment(file)?)
    }

    /// Every configuration layer, merged but not yet extracted.
    pub fn figment(file: Option<&Path>) -> Result<Figment> {
        let figment = Self::file_layers(default_path().as_deref(), file)?;
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    pub fn from_figment(figment: &Figment) -> Result<Self> {
        let config: Self = figment.extract().or_raise(|| ErrorKind::Invalid("failed to extract".to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn file_layers(default: Option<&Path>, file: Option<&Path>) -> Result<Figment> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(default) = default {
            // Missing files are skipped by the provider.
            tracing::trace!(path = %default.display(), "Merging default configuration file");
            figment = figment.merge(Toml::file(default));
        }
        if let Some(file) = file {
            if !file.is_file() {
                exn::bail!(ErrorKind::NotFound(file.to_path_buf()));
            }
            tracing::debug!(path = %file.display(), "Merging configuration file");
            figment = match file.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(file)),
                Some("yaml" | "yml") => figment.merge(Yaml::file(file)),
                Some("json") => figment.merge(Json::file(file)),
                _ => exn::bail!(ErrorKind::UnsupportedFormat(file.to_path_buf())),
            };
        }
        Ok(figment)
    }

    fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("http.user_agent must not be empty".to_string()));
        }
        if self.http.timeout_secs == 0 || self.http.connect_timeout_secs == 0 {
            exn::bail!(ErrorKind::Invalid("http timeouts must be at least one second".to_string()));
        }
        if self.preferred_location.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid("preferred_location must not be empty".to_string()));
        }
        Ok(())
    }
}

/// `config.toml` in the platform configuration directory.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("de", "Buecherhallen", "hallen").map(|dirs| dirs.config_dir().join(FILE_NAME))
}

//! Configuration for awscmd.
//!
//! Settings merge from three sources, lowest to highest precedence:
//! the TOML config file (`--config`, or `awscmd.toml` under the user config
//! directory), `AWSCMD_*` environment variables, and CLI flags.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use url::Url;

/// Fallback region when neither config nor environment sets one.
const DEFAULT_REGION: &str = "us-east-1";

/// Merged configuration for one awscmd run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Endpoint override. When unset, the endpoint is derived from the
    /// service id and region.
    pub endpoint: Option<String>,

    /// Region used to derive default endpoints.
    pub region: Option<String>,

    /// Extra headers attached to every request (e.g. for an authenticating
    /// proxy in front of the service).
    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    /// Per-call timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Loads configuration from an explicit path, or from the default
    /// location when present. A missing default file yields defaults; a
    /// missing explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };
        let content = std::fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("cannot read '{}': {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Default config file location under the user config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("awscmd").join("awscmd.toml"))
    }

    /// Applies `AWSCMD_ENDPOINT` / `AWSCMD_REGION` overrides.
    pub fn apply_env(&mut self) {
        if let Ok(endpoint) = std::env::var("AWSCMD_ENDPOINT") {
            if !endpoint.is_empty() {
                self.endpoint = Some(endpoint);
            }
        }
        if let Ok(region) = std::env::var("AWSCMD_REGION") {
            if !region.is_empty() {
                self.region = Some(region);
            }
        }
    }

    /// Resolves the endpoint URL for a service: the explicit override when
    /// set, otherwise the conventional `https://{service}.{region}` host.
    pub fn endpoint(&self, service: &str) -> Result<Url> {
        let raw = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => {
                let region = self.region.as_deref().unwrap_or(DEFAULT_REGION);
                format!("https://{}.{}.amazonaws.com/", service, region)
            }
        };
        Url::parse(&raw).map_err(|e| Error::Config(format!("invalid endpoint '{}': {}", raw, e)))
    }
}

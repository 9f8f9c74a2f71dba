use std::fmt;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ConfigError, Result};

/// Fixed marker written to logs and debug output in place of the API token.
pub const REDACTED_TOKEN: &str = "<not displayed>";

/// Immutable run configuration (assetsniff.toml + ASSETSNIFF_* env overrides).
///
/// Validated eagerly — an invalid value fails construction, it never degrades
/// into a half-usable config. A snapshot of this struct is handed to the sync
/// executor on every scheduled run.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunConfig {
    /// Seconds between scheduled sync runs. Must be >= 1.
    pub interval_secs: u64,
    /// When true the sync collaborator treats discovered hosts as servers.
    #[serde(default)]
    pub server_mode: bool,
    /// Base address of the asset-management API.
    pub api_address: String,
    /// Bearer token for the asset-management API. Never logged in full.
    pub api_token: String,
    /// Subnets to scan, e.g. "10.0.0.0/24". Empty means auto-detect.
    #[serde(default)]
    pub subnets: String,
}

impl RunConfig {
    /// Build a validated config from explicit values.
    pub fn new(
        interval_secs: u64,
        server_mode: bool,
        api_address: impl Into<String>,
        api_token: impl Into<String>,
        subnets: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            interval_secs,
            server_mode,
            api_address: api_address.into(),
            api_token: api_token.into(),
            subnets: subnets.into(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file with ASSETSNIFF_* env var overrides.
    ///
    /// Checks the explicit path argument first, falling back to
    /// `~/.assetsniff/assetsniff.toml`. The merged result is validated the
    /// same way as [`RunConfig::new`].
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: RunConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("ASSETSNIFF_"))
            .extract()
            .map_err(|e| ConfigError::Load(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Check the construction constraints. Called by both constructors.
    pub fn validate(&self) -> Result<()> {
        if self.interval_secs < 1 {
            return Err(ConfigError::InvalidInterval(self.interval_secs));
        }
        if self.api_address.is_empty() {
            return Err(ConfigError::MissingApiAddress);
        }
        if self.api_token.is_empty() {
            return Err(ConfigError::MissingApiToken);
        }
        Ok(())
    }

    /// Emit one info line per configuration field, token redacted.
    pub fn log_parameters(&self) {
        info!(interval_secs = self.interval_secs, "configuration parameter interval_secs set");
        info!(server_mode = self.server_mode, "configuration parameter server_mode set");
        info!(api_address = %self.api_address, "configuration parameter api_address set");
        info!(api_token = REDACTED_TOKEN, "configuration parameter api_token set");
        info!(subnets = %self.subnets, "configuration parameter subnets set");
    }
}

// Manual Debug so the token can never leak through `{:?}` formatting.
impl fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunConfig")
            .field("interval_secs", &self.interval_secs)
            .field("server_mode", &self.server_mode)
            .field("api_address", &self.api_address)
            .field("api_token", &REDACTED_TOKEN)
            .field("subnets", &self.subnets)
            .finish()
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{home}/.assetsniff/assetsniff.toml")
}

//! Configuration for fxscan.
//!
//! Values are layered with [figment], later sources overriding earlier ones:
//!
//! 1. Built-in defaults (the public fxhash endpoints and gateways).
//! 2. A configuration file. TOML, YAML or JSON, chosen by extension. Either
//!    given explicitly, or `config.toml` in the platform config directory
//!    if it exists.
//! 3. Environment variables prefixed with `FXSCAN_`, using `__` to separate
//!    nested keys (e.g. `FXSCAN_HTTP__TIMEOUT_SECS=10`).

pub mod error;

use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::instrument;

use crate::error::{ErrorKind, Result};

pub const ENV_PREFIX: &str = "FXSCAN_";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub page: PageConfig,
    pub gateways: GatewayConfig,
    pub http: HttpConfig,
    pub scan: ScanConfig,
}

/// Structured token API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// The token ID is appended as the last path segment.
    pub base_url: String,
}
impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: "https://api.fxhash.xyz/v1/tokens".to_string() }
    }
}

/// Human-facing generative token pages, used as the fallback source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// The token ID is appended as the last path segment.
    pub base_url: String,
}
impl Default for PageConfig {
    fn default() -> Self {
        Self { base_url: "https://www.fxhash.xyz/generative".to_string() }
    }
}

/// IPFS gateway roots, both ending in `/ipfs`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub public: String,
    pub marketplace: String,
}
impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            public: "https://gateway.ipfs.io/ipfs".to_string(),
            marketplace: "https://gateway.fxhash2.xyz/ipfs".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Applies to every request individually (API, page and code bundle).
    pub timeout_secs: u64,
    pub user_agent: String,
}
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 5,
            user_agent: format!("fxscan/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// How many tokens are resolved at the same time.
    pub concurrency: usize,
}
impl Default for ScanConfig {
    fn default() -> Self {
        Self { concurrency: 1 }
    }
}

impl Config {
    /// Loads and validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`NotFound`](ErrorKind::NotFound) if `file` is given but missing.
    /// - [`Load`](ErrorKind::Load) if a source cannot be parsed.
    /// - [`Invalid`](ErrorKind::Invalid) if a value fails validation.
    #[instrument(skip_all, fields(file = ?file))]
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let file = match file {
            Some(path) if !path.exists() => exn::bail!(ErrorKind::NotFound(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => default_path().filter(|path| path.exists()),
        };
        if let Some(path) = &file {
            tracing::debug!(path = %path.display(), "Loading configuration file");
        }
        Self::from_figment(Self::figment(file.as_deref()))
    }

    /// The layered sources, without extracting them.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = file {
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Config = figment.extract().or_raise(|| ErrorKind::Load)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_url("api.base_url", &self.api.base_url)?;
        check_url("page.base_url", &self.page.base_url)?;
        check_url("gateways.public", &self.gateways.public)?;
        check_url("gateways.marketplace", &self.gateways.marketplace)?;
        if self.http.timeout_secs == 0 {
            exn::bail!(ErrorKind::Invalid {
                field: "http.timeout_secs",
                reason: "must be at least one second".to_string(),
            });
        }
        if self.http.user_agent.trim().is_empty() {
            exn::bail!(ErrorKind::Invalid {
                field: "http.user_agent",
                reason: "must not be empty".to_string(),
            });
        }
        if self.scan.concurrency == 0 {
            exn::bail!(ErrorKind::Invalid {
                field: "scan.concurrency",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// `config.toml` in the platform configuration directory, whether or not
/// it exists.
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("xyz", "fxhash", "fxscan").map(|dirs| dirs.config_dir().join("config.toml"))
}

fn check_url(field: &'static str, value: &str) -> Result<()> {
    if value.starts_with("https://") || value.starts_with("http://") {
        return Ok(());
    }
    exn::bail!(ErrorKind::Invalid {
        field,
        reason: format!("expected an http(s) URL, found {value:?}"),
    });
}
